//! Risk assessment result types.
//!
//! Represents the output of the threshold-based LVNC risk scoring.

use serde::{Deserialize, Serialize};

/// Risk category classification for LVNC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    /// Lower risk, routine monitoring
    Lower,
    /// Moderate risk, follow-up recommended
    Moderate,
    /// High risk, urgent evaluation
    High,
}

impl RiskCategory {
    /// Classify a final risk score.
    ///
    /// Boundaries are strict greater-than, checked high to low: a score of
    /// exactly 0.60 is Moderate, exactly 0.50 is Lower.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 0.60 {
            Self::High
        } else if score > 0.50 {
            Self::Moderate
        } else {
            Self::Lower
        }
    }

    /// Get the clinical recommendation tied to this category.
    #[must_use]
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Lower => {
                "ROUTINE: Continue regular cardiac monitoring. Maintain healthy lifestyle."
            }
            Self::Moderate => {
                "ATTENTION: Follow-up with cardiologist. Monitor cardiac function closely."
            }
            Self::High => {
                "URGENT: Immediate clinical evaluation recommended. \
                 Consider advanced cardiac imaging (MRI)."
            }
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Lower => (0, 255, 0),      // Green (#00FF00)
            Self::Moderate => (255, 165, 0), // Orange (#FFA500)
            Self::High => (255, 75, 75),     // Red (#FF4B4B)
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lower => write!(f, "Lower risk"),
            Self::Moderate => write!(f, "Moderate risk"),
            Self::High => write!(f, "High risk"),
        }
    }
}

/// Result of scoring one set of cardiac measurements.
///
/// Created fresh on each scoring request; never mutated or stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// EDV minus ESV, mL
    pub delta_volume: f64,

    /// Shape irregularity index; displayed but not factored into the score
    pub irregularity_index: f64,

    /// Additive sum of weighted contributions, [0.0, 1.0]
    pub risk_score: f64,

    /// Risk classification derived from the final score
    pub category: RiskCategory,
}

impl RiskAssessment {
    /// Get the clinical recommendation for this assessment.
    #[must_use]
    pub fn recommendation(&self) -> &'static str {
        self.category.recommendation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_score() {
        assert_eq!(RiskCategory::from_score(0.10), RiskCategory::Lower);
        assert_eq!(RiskCategory::from_score(0.55), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(0.95), RiskCategory::High);
    }

    #[test]
    fn test_category_boundaries_are_strict() {
        // Exactly 0.60 is Moderate, not High; exactly 0.50 is Lower, not Moderate.
        assert_eq!(RiskCategory::from_score(0.60), RiskCategory::Moderate);
        assert_eq!(RiskCategory::from_score(0.50), RiskCategory::Lower);
    }

    #[test]
    fn test_recommendation_tied_to_category() {
        assert!(RiskCategory::Lower.recommendation().starts_with("ROUTINE"));
        assert!(RiskCategory::Moderate.recommendation().starts_with("ATTENTION"));
        assert!(RiskCategory::High.recommendation().starts_with("URGENT"));
    }
}
