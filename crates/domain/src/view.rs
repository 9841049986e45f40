//! Visitor stats view model — the pure projection every renderer draws.
//!
//! [`VisitorStatsView::project`] has two outcomes only: a loading state with
//! three placeholders, or three populated cards. Missing data never produces
//! an error state, just zero-valued cards.

use serde::Serialize;

use crate::card::{CardIcon, CardTone, StatCardView};
use crate::duration;
use crate::input::VisitorStatsInput;
use crate::number::format_visits;
use crate::traffic::PEAK_HOUR_FALLBACK;

pub const DURATION_LABEL: &str = "Rata-rata Durasi";
pub const PEAK_HOUR_LABEL: &str = "Jam Tersibuk";
pub const MONTH_TOTAL_LABEL: &str = "Total Bulan Ini";

/// Secondary text of the monthly total card.
pub const VISITORS_UNIT: &str = "pengunjung";

/// What the stats grid shows for one render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "cards", rename_all = "lowercase")]
pub enum VisitorStatsView {
    Loading,
    Loaded([StatCardView; 3]),
}

impl VisitorStatsView {
    /// Number of grid slots, identical in both states.
    pub const SLOTS: usize = 3;

    /// Project the inputs for one render.
    ///
    /// `loading` wins over any data that is present.
    #[must_use]
    pub fn project(input: &VisitorStatsInput, loading: bool) -> Self {
        if loading {
            return Self::Loading;
        }
        Self::Loaded([
            duration_card(input),
            peak_hour_card(input),
            month_total_card(input),
        ])
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Populated cards, `None` while loading.
    #[must_use]
    pub fn cards(&self) -> Option<&[StatCardView; 3]> {
        match self {
            Self::Loading => None,
            Self::Loaded(cards) => Some(cards),
        }
    }

    /// Number of children in the grid.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        match self {
            Self::Loading => Self::SLOTS,
            Self::Loaded(cards) => cards.len(),
        }
    }
}

fn duration_card(input: &VisitorStatsInput) -> StatCardView {
    let stats = input.duration_stats.as_ref();
    StatCardView::new(CardIcon::Clock, DURATION_LABEL, duration::average_text(stats))
        .with_sub_value(format!("Median: {}", duration::median_text(stats)))
        .with_tone(CardTone::Blue)
}

fn peak_hour_card(input: &VisitorStatsInput) -> StatCardView {
    let peak = input.peak_hour();
    let hour = peak
        .map(|bucket| bucket.hour.as_str())
        .filter(|hour| !hour.is_empty())
        .unwrap_or(PEAK_HOUR_FALLBACK);
    let visits = peak.map_or(0, |bucket| bucket.visits);

    StatCardView::new(CardIcon::TrendingUp, PEAK_HOUR_LABEL, hour)
        .with_sub_value(format!(
            "{visits} {VISITORS_UNIT} \u{2022} {} jam peak",
            input.peak_hours_count()
        ))
        .with_tone(CardTone::Green)
}

fn month_total_card(input: &VisitorStatsInput) -> StatCardView {
    let total = input
        .total_month_visits
        .map_or_else(|| "0".to_string(), format_visits);

    StatCardView::new(CardIcon::Users, MONTH_TOTAL_LABEL, total)
        .with_sub_value(VISITORS_UNIT)
        .with_tone(CardTone::Purple)
}
