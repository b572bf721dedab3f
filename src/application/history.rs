//! Synthetic patient history for the sample-history view.
//!
//! Generates random illustrative records of prior scans. Nothing here is
//! persisted or tied to a real patient.

use chrono::{Duration, NaiveDate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// One illustrative prior-scan record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Visit date
    pub recorded_at: NaiveDate,

    /// Ejection fraction, percent
    pub ef: f64,

    /// Risk score computed at that visit
    pub risk_score: f64,

    /// Trabeculation density index
    pub trabeculation_density: f64,
}

/// Generate `n` sample history records with dates evenly spaced across the
/// demo window (2024-01-01 to 2024-10-01).
///
/// EF is drawn uniformly from [45, 65), the risk score from [0.3, 0.7) and
/// the trabeculation density from [0, 5).
#[must_use]
pub fn sample_history(n: usize) -> Vec<HistoryEntry> {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
    let end = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap_or_default();
    let span_days = (end - start).num_days();

    let mut rng = ChaCha20Rng::from_entropy();

    (0..n)
        .map(|i| {
            let offset = if n > 1 {
                span_days * i as i64 / (n as i64 - 1)
            } else {
                0
            };

            HistoryEntry {
                recorded_at: start + Duration::days(offset),
                ef: rng.gen_range(45.0..65.0),
                risk_score: rng.gen_range(0.3..0.7),
                trabeculation_density: rng.gen_range(0.0..5.0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_length() {
        assert_eq!(sample_history(10).len(), 10);
        assert!(sample_history(0).is_empty());
    }

    #[test]
    fn test_history_values_in_range() {
        for entry in sample_history(10) {
            assert!((45.0..65.0).contains(&entry.ef));
            assert!((0.3..0.7).contains(&entry.risk_score));
            assert!((0.0..5.0).contains(&entry.trabeculation_density));
        }
    }

    #[test]
    fn test_history_date_endpoints() {
        let history = sample_history(10);
        let first = history.first().expect("non-empty");
        let last = history.last().expect("non-empty");

        assert_eq!(first.recorded_at, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(last.recorded_at, NaiveDate::from_ymd_opt(2024, 10, 1).unwrap());
    }

    #[test]
    fn test_history_dates_monotonic() {
        let history = sample_history(10);
        for pair in history.windows(2) {
            assert!(pair[0].recorded_at < pair[1].recorded_at);
        }
    }
}
