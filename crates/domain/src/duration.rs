//! Visit duration statistics, pre-formatted by the aggregation layer.

use serde::{Deserialize, Serialize};

/// Text shown when no duration statistics are available.
pub const DURATION_FALLBACK: &str = "0 menit";

/// Average and median visit duration, already formatted for display
/// (e.g. `"12 menit"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationStats {
    pub formatted_average: String,
    pub formatted_median: String,
}

impl DurationStats {
    #[must_use]
    pub fn new(formatted_average: impl Into<String>, formatted_median: impl Into<String>) -> Self {
        Self {
            formatted_average: formatted_average.into(),
            formatted_median: formatted_median.into(),
        }
    }
}

/// Average duration text, or [`DURATION_FALLBACK`] when absent or blank.
#[must_use]
pub fn average_text(stats: Option<&DurationStats>) -> &str {
    or_fallback(stats.map(|s| s.formatted_average.as_str()))
}

/// Median duration text, or [`DURATION_FALLBACK`] when absent or blank.
#[must_use]
pub fn median_text(stats: Option<&DurationStats>) -> &str {
    or_fallback(stats.map(|s| s.formatted_median.as_str()))
}

fn or_fallback(text: Option<&str>) -> &str {
    text.filter(|t| !t.is_empty()).unwrap_or(DURATION_FALLBACK)
}
