use leptos::prelude::*;
use visitor_stats_domain::input::VisitorStatsInput;

mod components;

pub use components::{StatCard, StatCardSkeleton, VisitorStats};

/// Snapshot bundled with the demo page.
const SAMPLE_SNAPSHOT: &str = include_str!("../assets/sample-snapshot.json");

/// Root application component.
///
/// Shows the stats grid fed by the bundled sample snapshot, starting in the
/// loading state, with a button flipping the `loading` flag.
#[component]
pub fn App() -> impl IntoView {
    let (loading, set_loading) = signal(true);
    let sample = VisitorStatsInput::from_json(SAMPLE_SNAPSHOT);
    let error = sample.as_ref().err().map(ToString::to_string);
    let input = Signal::stored(sample.unwrap_or_default());

    view! {
        <main>
            <h1>"Statistik Pengunjung"</h1>
            {error.map(|err| view! { <p class="error">"Failed to load sample snapshot: " {err}</p> })}
            <button
                class="btn btn-secondary btn-sm"
                on:click=move |_| set_loading.update(|value| *value = !*value)
            >
                {move || if loading.get() { "Tampilkan data" } else { "Tampilkan skeleton" }}
            </button>
            <VisitorStats input=input loading=loading/>
        </main>
    }
}
