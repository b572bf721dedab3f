//! Threshold-based LVNC risk scoring.
//!
//! A pure, total function over the six measurement inputs. No validation is
//! performed here; the input form clamps values to their documented domains
//! before calling.

use super::{CardiacMeasurement, RiskAssessment, RiskCategory};

/// Score a set of cardiac measurements.
///
/// Contributions are additive and evaluated in a fixed order:
/// - EF: <40 adds 0.40, <50 adds 0.20, otherwise 0.05
/// - Trabeculation density: >5 adds 0.35, >2 adds 0.20, otherwise 0.05
/// - Delta volume (EDV-ESV): <60 adds 0.15, <80 adds 0.08, otherwise nothing
/// - Flow: either rate <150 adds 0.10, once
///
/// The irregularity index is derived for display only and never factors
/// into the score. The +0.0001 epsilon guards the division when EDV+ESV
/// is near zero, which the documented domains make unreachable.
#[must_use]
pub fn assess(m: &CardiacMeasurement) -> RiskAssessment {
    let delta_volume = m.edv - m.esv;
    let irregularity_index = 2.0 * (m.edv.sqrt() + m.esv.sqrt()) / (m.edv + m.esv + 0.0001);

    let mut risk_score = 0.0;

    // EF contribution (40% weight)
    if m.ef < 40.0 {
        risk_score += 0.40;
    } else if m.ef < 50.0 {
        risk_score += 0.20;
    } else {
        risk_score += 0.05;
    }

    // Trabeculation density contribution (35% weight)
    if m.trabeculation_density > 5.0 {
        risk_score += 0.35;
    } else if m.trabeculation_density > 2.0 {
        risk_score += 0.20;
    } else {
        risk_score += 0.05;
    }

    // Volume-based contribution (25% weight)
    if delta_volume < 60.0 {
        risk_score += 0.15;
    } else if delta_volume < 80.0 {
        risk_score += 0.08;
    }

    if m.filling_rate < 150.0 || m.emptying_rate < 150.0 {
        risk_score += 0.10;
    }

    RiskAssessment {
        delta_volume,
        irregularity_index,
        risk_score,
        category: RiskCategory::from_score(risk_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn baseline() -> CardiacMeasurement {
        // All contributions at their minimum except the constant floors:
        // EF >= 50 (+0.05), density <= 2 (+0.05), delta >= 80 (0), flow ok (0).
        CardiacMeasurement {
            edv: 150.0,
            esv: 60.0,
            ef: 55.0,
            filling_rate: 200.0,
            emptying_rate: 180.0,
            trabeculation_density: 0.5,
        }
    }

    fn score(m: &CardiacMeasurement) -> f64 {
        assess(m).risk_score
    }

    #[test]
    fn test_ef_contribution_boundaries() {
        let base = score(&baseline()); // EF branch contributes 0.05 here

        let low = CardiacMeasurement { ef: 39.9, ..baseline() };
        assert!((score(&low) - base - 0.35).abs() < EPS); // 0.40 instead of 0.05

        let mid = CardiacMeasurement { ef: 40.0, ..baseline() };
        assert!((score(&mid) - base - 0.15).abs() < EPS); // 0.20 instead of 0.05

        let upper_mid = CardiacMeasurement { ef: 49.9, ..baseline() };
        assert!((score(&upper_mid) - base - 0.15).abs() < EPS);

        let normal = CardiacMeasurement { ef: 50.0, ..baseline() };
        assert!((score(&normal) - base).abs() < EPS);
    }

    #[test]
    fn test_trabeculation_contribution_boundaries() {
        let base = score(&baseline()); // density branch contributes 0.05 here

        let high = CardiacMeasurement { trabeculation_density: 5.1, ..baseline() };
        assert!((score(&high) - base - 0.30).abs() < EPS); // 0.35 instead of 0.05

        // Exactly 5 is not >5: falls to the middle branch.
        let five = CardiacMeasurement { trabeculation_density: 5.0, ..baseline() };
        assert!((score(&five) - base - 0.15).abs() < EPS);

        // Exactly 2 is not >2: stays at the 0.05 floor.
        let two = CardiacMeasurement { trabeculation_density: 2.0, ..baseline() };
        assert!((score(&two) - base).abs() < EPS);
    }

    #[test]
    fn test_volume_contribution_boundaries() {
        let base = score(&baseline()); // delta = 90, no volume contribution

        let small = CardiacMeasurement { esv: 100.0, ..baseline() }; // delta 50
        assert!((score(&small) - base - 0.15).abs() < EPS);

        let sixty = CardiacMeasurement { esv: 90.0, ..baseline() }; // delta 60
        assert!((score(&sixty) - base - 0.08).abs() < EPS);

        // delta of exactly 80 contributes nothing.
        let eighty = CardiacMeasurement { esv: 70.0, ..baseline() };
        assert!((score(&eighty) - base).abs() < EPS);
    }

    #[test]
    fn test_flow_contribution_never_double_counts() {
        let base = score(&baseline());

        let slow_fill = CardiacMeasurement { filling_rate: 120.0, ..baseline() };
        let slow_empty = CardiacMeasurement { emptying_rate: 120.0, ..baseline() };
        let slow_both = CardiacMeasurement {
            filling_rate: 120.0,
            emptying_rate: 120.0,
            ..baseline()
        };

        assert!((score(&slow_fill) - base - 0.10).abs() < EPS);
        assert!((score(&slow_empty) - base - 0.10).abs() < EPS);
        // Both rates low still adds 0.10 exactly once.
        assert!((score(&slow_both) - base - 0.10).abs() < EPS);

        // Exactly 150 does not trigger.
        let at_threshold = CardiacMeasurement {
            filling_rate: 150.0,
            emptying_rate: 150.0,
            ..baseline()
        };
        assert!((score(&at_threshold) - base).abs() < EPS);
    }

    #[test]
    fn test_delta_volume_is_exact() {
        let a = assess(&baseline());
        assert!((a.delta_volume - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_irregularity_index_finite_and_positive() {
        // Corners of the documented domains.
        for &(edv, esv) in &[(50.0, 20.0), (50.0, 300.0), (400.0, 20.0), (400.0, 300.0)] {
            let m = CardiacMeasurement { edv, esv, ..baseline() };
            let a = assess(&m);
            assert!(a.irregularity_index.is_finite());
            assert!(a.irregularity_index > 0.0);
        }
    }

    #[test]
    fn test_lower_risk_scenario() {
        // edv=150, esv=60, ef=55, fill=200, empty=180, trab=0.5:
        // delta 90, contributions 0.05 + 0.05 + 0 + 0 = 0.10.
        let a = assess(&baseline());
        assert!((a.risk_score - 0.10).abs() < EPS);
        assert_eq!(a.category, RiskCategory::Lower);
    }

    #[test]
    fn test_high_risk_scenario() {
        // delta 50, contributions 0.40 + 0.35 + 0.15 + 0.10 = 1.00.
        let m = CardiacMeasurement {
            edv: 150.0,
            esv: 100.0,
            ef: 35.0,
            filling_rate: 120.0,
            emptying_rate: 180.0,
            trabeculation_density: 6.0,
        };
        let a = assess(&m);
        assert!((a.risk_score - 1.00).abs() < EPS);
        assert_eq!(a.category, RiskCategory::High);
    }

    #[test]
    fn test_mid_scenario_stays_lower_risk() {
        // delta exactly 80, contributions 0.20 + 0.20 + 0 + 0 = 0.40.
        let m = CardiacMeasurement {
            edv: 150.0,
            esv: 70.0,
            ef: 45.0,
            filling_rate: 200.0,
            emptying_rate: 200.0,
            trabeculation_density: 3.0,
        };
        let a = assess(&m);
        assert!((a.risk_score - 0.40).abs() < EPS);
        assert_eq!(a.category, RiskCategory::Lower);
    }

    #[test]
    fn test_total_over_out_of_domain_inputs() {
        // The scorer imposes no guards of its own; wild inputs still score.
        let m = CardiacMeasurement {
            edv: 1000.0,
            esv: 0.0,
            ef: -20.0,
            filling_rate: 0.0,
            emptying_rate: 0.0,
            trabeculation_density: 100.0,
        };
        let a = assess(&m);
        assert!(a.risk_score.is_finite());
        assert_eq!(a.category, RiskCategory::High);
    }
}
