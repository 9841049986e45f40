//! Locale-aware formatting of visit counts.

use num_format::{Locale, ToFormattedString};

/// Display locale for counts: Indonesian groups thousands with `.`.
pub const DISPLAY_LOCALE: Locale = Locale::id;

/// Format a visit count with Indonesian digit grouping (`125000` → `"125.000"`).
#[must_use]
pub fn format_visits(count: u64) -> String {
    count.to_formatted_string(&DISPLAY_LOCALE)
}
