//! Hourly traffic buckets and peak-hour derivation.

use serde::{Deserialize, Serialize};

/// Text shown in place of the peak hour when no bucket exists.
pub const PEAK_HOUR_FALLBACK: &str = "-";

/// Visits recorded in one hour bucket.
///
/// `hour` is formatted by the aggregation layer (e.g. `"14:00"`) and
/// `is_peak` marks the bucket as part of the busy set computed there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyVisits {
    pub hour: String,
    pub visits: u64,
    pub is_peak: bool,
}

impl HourlyVisits {
    #[must_use]
    pub fn new(hour: impl Into<String>, visits: u64, is_peak: bool) -> Self {
        Self {
            hour: hour.into(),
            visits,
            is_peak,
        }
    }
}

/// Return the bucket with the most visits.
///
/// Folds from "no candidate" and only replaces the candidate on a strictly
/// greater count, so the first of several equal buckets wins.
#[must_use]
pub fn peak_hour(buckets: &[HourlyVisits]) -> Option<&HourlyVisits> {
    buckets.iter().fold(None, |best, bucket| match best {
        Some(current) if bucket.visits <= current.visits => Some(current),
        _ => Some(bucket),
    })
}

/// Count the buckets flagged as peak.
#[must_use]
pub fn peak_hours_count(buckets: &[HourlyVisits]) -> usize {
    buckets.iter().filter(|bucket| bucket.is_peak).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<HourlyVisits> {
        vec![
            HourlyVisits::new("14:00", 10, true),
            HourlyVisits::new("15:00", 25, true),
            HourlyVisits::new("09:00", 5, false),
        ]
    }

    #[test]
    fn should_select_bucket_with_most_visits() {
        let buckets = sample();
        let peak = peak_hour(&buckets).unwrap();
        assert_eq!(peak.hour, "15:00");
        assert_eq!(peak.visits, 25);
    }

    #[test]
    fn should_keep_first_bucket_when_visits_are_tied() {
        let buckets = vec![
            HourlyVisits::new("A", 10, true),
            HourlyVisits::new("B", 10, true),
        ];
        assert_eq!(peak_hour(&buckets).unwrap().hour, "A");
    }

    #[test]
    fn should_keep_earlier_maximum_when_later_tie_follows_smaller_bucket() {
        let buckets = vec![
            HourlyVisits::new("08:00", 7, false),
            HourlyVisits::new("09:00", 3, false),
            HourlyVisits::new("10:00", 7, true),
        ];
        assert_eq!(peak_hour(&buckets).unwrap().hour, "08:00");
    }

    #[test]
    fn should_return_none_when_no_buckets() {
        assert!(peak_hour(&[]).is_none());
    }

    #[test]
    fn should_select_single_bucket_even_with_zero_visits() {
        let buckets = vec![HourlyVisits::new("00:00", 0, false)];
        assert_eq!(peak_hour(&buckets).unwrap().hour, "00:00");
    }

    #[test]
    fn should_count_flagged_peak_hours() {
        assert_eq!(peak_hours_count(&sample()), 2);
    }

    #[test]
    fn should_count_zero_when_no_buckets() {
        assert_eq!(peak_hours_count(&[]), 0);
    }

    #[test]
    fn should_deserialize_camel_case_keys() {
        let json = r#"{"hour":"14:00","visits":10,"isPeak":true}"#;
        let bucket: HourlyVisits = serde_json::from_str(json).unwrap();
        assert_eq!(bucket, HourlyVisits::new("14:00", 10, true));
    }
}
