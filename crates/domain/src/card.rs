//! Stat card view model — one labelled metric with an icon.

use serde::Serialize;

/// Icon shown at the top of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardIcon {
    Clock,
    TrendingUp,
    Users,
}

impl CardIcon {
    /// Stable name used for CSS classes.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::TrendingUp => "trending-up",
            Self::Users => "users",
        }
    }
}

/// Colour variant of a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTone {
    #[default]
    Blue,
    Green,
    Purple,
}

impl CardTone {
    /// Stable name used for CSS classes.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
        }
    }
}

/// Everything a renderer needs to draw one populated card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCardView {
    pub icon: CardIcon,
    pub label: String,
    pub value: String,
    pub sub_value: Option<String>,
    pub tone: CardTone,
}

impl StatCardView {
    #[must_use]
    pub fn new(icon: CardIcon, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            value: value.into(),
            sub_value: None,
            tone: CardTone::default(),
        }
    }

    #[must_use]
    pub fn with_sub_value(mut self, sub_value: impl Into<String>) -> Self {
        self.sub_value = Some(sub_value.into());
        self
    }

    #[must_use]
    pub fn with_tone(mut self, tone: CardTone) -> Self {
        self.tone = tone;
        self
    }

    /// Secondary line to display; `None` when absent or empty, in which case
    /// renderers omit the line entirely.
    #[must_use]
    pub fn visible_sub_value(&self) -> Option<&str> {
        self.sub_value.as_deref().filter(|text| !text.is_empty())
    }

    /// CSS class list for the card container.
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("stat-card stat-card--{}", self.tone.name())
    }

    /// CSS class list for the icon element.
    #[must_use]
    pub fn icon_class(&self) -> String {
        format!("stat-icon stat-icon--{}", self.icon.name())
    }
}
