//! Cardiac measurement input types.
//!
//! Six echocardiographic features used for LVNC risk stratification.

use serde::{Deserialize, Serialize};

/// A single set of manually entered cardiac measurements.
///
/// Documented domains (enforced by the input form, not by the scorer):
/// EDV [50, 400] mL, ESV [20, 300] mL, EF [10, 80] %, filling and emptying
/// rates [50, 500] mL/s, trabeculation density [-5, 15].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CardiacMeasurement {
    /// End-diastolic volume in mL (normal range: 100-160)
    pub edv: f64,

    /// End-systolic volume in mL (normal range: 40-70)
    pub esv: f64,

    /// Ejection fraction in percent (normal: >50, <40 indicates high risk)
    pub ef: f64,

    /// Rate of ventricular filling during diastole, mL/s
    pub filling_rate: f64,

    /// Rate of ventricular emptying during systole, mL/s
    pub emptying_rate: f64,

    /// Trabeculation density index; higher values indicate more trabeculation
    pub trabeculation_density: f64,
}

impl CardiacMeasurement {
    /// Create a measurement from a vector of six values.
    ///
    /// Order: EDV, ESV, EF, filling rate, emptying rate, trabeculation density.
    ///
    /// # Errors
    /// Returns error if vector length is not 6.
    pub fn from_vec(v: &[f64]) -> Result<Self, String> {
        if v.len() != 6 {
            return Err(format!("Expected 6 measurements, got {}", v.len()));
        }

        Ok(Self {
            edv: v[0],
            esv: v[1],
            ef: v[2],
            filling_rate: v[3],
            emptying_rate: v[4],
            trabeculation_density: v[5],
        })
    }

    /// Validate that all measurements are within their documented domains.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(50.0..=400.0).contains(&self.edv) {
            errors.push(format!("EDV {} out of range [50, 400]", self.edv));
        }
        if !(20.0..=300.0).contains(&self.esv) {
            errors.push(format!("ESV {} out of range [20, 300]", self.esv));
        }
        if !(10.0..=80.0).contains(&self.ef) {
            errors.push(format!("EF {} out of range [10, 80]", self.ef));
        }
        if !(50.0..=500.0).contains(&self.filling_rate) {
            errors.push(format!(
                "Filling rate {} out of range [50, 500]",
                self.filling_rate
            ));
        }
        if !(50.0..=500.0).contains(&self.emptying_rate) {
            errors.push(format!(
                "Emptying rate {} out of range [50, 500]",
                self.emptying_rate
            ));
        }
        if !(-5.0..=15.0).contains(&self.trabeculation_density) {
            errors.push(format!(
                "Trabeculation density {} out of range [-5, 15]",
                self.trabeculation_density
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Whether EDV falls in the clinically normal range (100-160 mL).
    #[must_use]
    pub fn edv_normal(&self) -> bool {
        (100.0..=160.0).contains(&self.edv)
    }

    /// Whether ESV falls in the clinically normal range (40-70 mL).
    #[must_use]
    pub fn esv_normal(&self) -> bool {
        (40.0..=70.0).contains(&self.esv)
    }

    /// Whether EF is in the normal range (>50%).
    #[must_use]
    pub fn ef_normal(&self) -> bool {
        self.ef > 50.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typical() -> CardiacMeasurement {
        CardiacMeasurement {
            edv: 150.0,
            esv: 60.0,
            ef: 55.0,
            filling_rate: 200.0,
            emptying_rate: 180.0,
            trabeculation_density: 0.5,
        }
    }

    #[test]
    fn test_from_vec() {
        let v = vec![150.0, 60.0, 55.0, 200.0, 180.0, 0.5];
        let m = CardiacMeasurement::from_vec(&v).expect("Should parse");
        assert!((m.edv - 150.0).abs() < f64::EPSILON);
        assert!((m.trabeculation_density - 0.5).abs() < f64::EPSILON);

        assert!(CardiacMeasurement::from_vec(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_validation() {
        assert!(typical().validate().is_ok());

        let invalid = CardiacMeasurement {
            edv: 30.0,  // invalid (< 50)
            ef: 95.0,   // invalid (> 80)
            ..typical()
        };
        let errors = invalid.validate().expect_err("Should reject");
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_negative_trabeculation_is_valid() {
        let m = CardiacMeasurement {
            trabeculation_density: -3.0,
            ..typical()
        };
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_normal_range_markers() {
        let m = typical();
        assert!(m.edv_normal());
        assert!(m.esv_normal());
        assert!(m.ef_normal());

        let low_ef = CardiacMeasurement { ef: 50.0, ..typical() };
        assert!(!low_ef.ef_normal());
    }
}
