//! Stat card component for displaying one labelled metric.

use leptos::prelude::*;
use visitor_stats_domain::card::{CardIcon, CardTone, StatCardView};

/// A card displaying an icon, a label, a value and an optional secondary line.
#[component]
pub fn StatCard(
    /// The icon shown above the label.
    icon: CardIcon,
    /// The label shown above the value.
    #[prop(into)]
    label: String,
    /// The primary value, already formatted.
    #[prop(into)]
    value: String,
    /// Secondary line under the value; omitted when `None` or empty.
    #[prop(optional_no_strip)]
    sub_value: Option<String>,
    /// Colour variant of the card.
    #[prop(optional)]
    tone: CardTone,
) -> impl IntoView {
    let card = StatCardView {
        icon,
        label,
        value,
        sub_value,
        tone,
    };
    let class = card.css_class();
    let icon_class = card.icon_class();
    let sub_value = card.visible_sub_value().map(str::to_string);
    let StatCardView { label, value, .. } = card;

    view! {
        <div class=class>
            <span class=icon_class aria-hidden="true"></span>
            <span class="stat-label">{label}</span>
            <span class="stat-value">{value}</span>
            {sub_value.map(|text| view! { <span class="stat-sub-value">{text}</span> })}
        </div>
    }
}
