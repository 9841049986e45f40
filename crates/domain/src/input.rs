//! Snapshot of pre-computed statistics handed to the cards.

use serde::{Deserialize, Serialize};

use crate::duration::DurationStats;
use crate::error::VisitorStatsError;
use crate::traffic::{self, HourlyVisits};

/// Read-only input of the visitor statistics cards.
///
/// Every field is optional; a missing field renders as a zero-valued card,
/// never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisitorStatsInput {
    pub duration_stats: Option<DurationStats>,
    pub peak_hours: Option<Vec<HourlyVisits>>,
    pub total_month_visits: Option<u64>,
}

impl VisitorStatsInput {
    /// Create a builder for constructing a [`VisitorStatsInput`].
    #[must_use]
    pub fn builder() -> VisitorStatsInputBuilder {
        VisitorStatsInputBuilder::default()
    }

    /// Decode a snapshot document with camelCase keys.
    ///
    /// # Errors
    ///
    /// Returns [`VisitorStatsError::Snapshot`] when the document is not valid
    /// JSON or a present field has the wrong shape.
    pub fn from_json(document: &str) -> Result<Self, VisitorStatsError> {
        Ok(serde_json::from_str(document)?)
    }

    /// Hour buckets, empty when absent.
    #[must_use]
    pub fn hour_buckets(&self) -> &[HourlyVisits] {
        self.peak_hours.as_deref().unwrap_or_default()
    }

    /// The bucket with the most visits, first one on ties.
    #[must_use]
    pub fn peak_hour(&self) -> Option<&HourlyVisits> {
        traffic::peak_hour(self.hour_buckets())
    }

    /// Number of buckets flagged as peak.
    #[must_use]
    pub fn peak_hours_count(&self) -> usize {
        traffic::peak_hours_count(self.hour_buckets())
    }
}

/// Step-by-step builder for [`VisitorStatsInput`].
#[derive(Debug, Default)]
pub struct VisitorStatsInputBuilder {
    duration_stats: Option<DurationStats>,
    peak_hours: Option<Vec<HourlyVisits>>,
    total_month_visits: Option<u64>,
}

impl VisitorStatsInputBuilder {
    #[must_use]
    pub fn duration_stats(mut self, stats: DurationStats) -> Self {
        self.duration_stats = Some(stats);
        self
    }

    #[must_use]
    pub fn peak_hours(mut self, buckets: Vec<HourlyVisits>) -> Self {
        self.peak_hours = Some(buckets);
        self
    }

    #[must_use]
    pub fn total_month_visits(mut self, total: u64) -> Self {
        self.total_month_visits = Some(total);
        self
    }

    /// Consume the builder and return a [`VisitorStatsInput`].
    #[must_use]
    pub fn build(self) -> VisitorStatsInput {
        VisitorStatsInput {
            duration_stats: self.duration_stats,
            peak_hours: self.peak_hours,
            total_month_visits: self.total_month_visits,
        }
    }
}
