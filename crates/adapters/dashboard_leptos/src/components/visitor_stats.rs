//! Visitor stats grid — three stat cards or three skeletons.

use leptos::prelude::*;
use visitor_stats_domain::input::VisitorStatsInput;
use visitor_stats_domain::view::VisitorStatsView;

use super::{StatCard, StatCardSkeleton};

/// Grid of the duration, peak-hour and monthly-total cards.
///
/// Re-projects the latest `input` snapshot whenever it or `loading` changes;
/// the component keeps no state of its own.
#[component]
pub fn VisitorStats(
    /// Pre-computed statistics to display.
    #[prop(into)]
    input: Signal<VisitorStatsInput>,
    /// Show skeleton placeholders instead of the cards.
    #[prop(into, default = Signal::stored(false))]
    loading: Signal<bool>,
) -> impl IntoView {
    let projection =
        Memo::new(move |_| input.with(|input| VisitorStatsView::project(input, loading.get())));

    view! {
        <div class="visitor-stats">
            {move || match projection.get() {
                VisitorStatsView::Loading => (0..VisitorStatsView::SLOTS)
                    .map(|_| view! { <StatCardSkeleton/> })
                    .collect_view()
                    .into_any(),
                VisitorStatsView::Loaded(cards) => cards
                    .into_iter()
                    .map(|card| {
                        view! {
                            <StatCard
                                icon=card.icon
                                label=card.label
                                value=card.value
                                sub_value=card.sub_value
                                tone=card.tone
                            />
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
