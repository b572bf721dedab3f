//! Assessment service: Validates and scores cardiac measurements.

use crate::domain::{self, CardiacMeasurement, RiskAssessment};
use crate::CardioScanError;

/// Service wrapping the risk scorer.
///
/// The scorer itself is total and never fails; this service adds the domain
/// range check the presentation layer relies on and logs each completed
/// assessment. Raw measurement values are never logged.
#[derive(Debug, Default)]
pub struct AssessmentService;

impl AssessmentService {
    /// Create a new assessment service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validate and score a measurement.
    ///
    /// # Errors
    /// Returns `CardioScanError::Validation` listing every field outside its
    /// documented domain.
    pub fn assess(
        &self,
        measurement: &CardiacMeasurement,
    ) -> Result<RiskAssessment, CardioScanError> {
        measurement
            .validate()
            .map_err(|errors| CardioScanError::Validation(errors.join(", ")))?;

        let assessment = domain::assess(measurement);

        tracing::info!(
            "Assessment complete: score={:.2}, category={}",
            assessment.risk_score,
            assessment.category
        );

        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RiskCategory;

    #[test]
    fn test_assess_valid_measurement() {
        let service = AssessmentService::new();
        let m = CardiacMeasurement {
            edv: 150.0,
            esv: 60.0,
            ef: 55.0,
            filling_rate: 200.0,
            emptying_rate: 180.0,
            trabeculation_density: 0.5,
        };

        let assessment = service.assess(&m).expect("Should assess");
        assert_eq!(assessment.category, RiskCategory::Lower);
    }

    #[test]
    fn test_assess_rejects_out_of_domain() {
        let service = AssessmentService::new();
        let m = CardiacMeasurement {
            edv: 30.0, // below the documented domain
            esv: 60.0,
            ef: 55.0,
            filling_rate: 200.0,
            emptying_rate: 180.0,
            trabeculation_density: 0.5,
        };

        let err = service.assess(&m).expect_err("Should reject");
        assert!(matches!(err, CardioScanError::Validation(_)));
        assert!(err.to_string().contains("EDV"));
    }
}
