//! Skeleton placeholder shown in place of a stat card while loading.

use leptos::prelude::*;

/// A pulsing placeholder with an icon block, a wide label bar and a narrower
/// value bar.
#[component]
pub fn StatCardSkeleton() -> impl IntoView {
    view! {
        <div class="stat-card-skeleton animate-pulse" aria-busy="true">
            <div class="skeleton skeleton-icon"></div>
            <div class="skeleton skeleton-label"></div>
            <div class="skeleton skeleton-value"></div>
        </div>
    }
}
