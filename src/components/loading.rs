//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Inline loading spinner
#[component]
pub fn InlineLoading() -> impl IntoView {
    view! {
        <span class="inline-block loading-spinner w-4 h-4" />
    }
}

/// Skeleton loader for a single league card
#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 animate-pulse">
            <div class="h-5 bg-gray-700 rounded w-1/2 mb-3" />
            <div class="h-4 bg-gray-700 rounded w-1/3 mb-4" />
            <div class="h-16 bg-gray-700 rounded" />
        </div>
    }
}

/// Skeleton grid shown while the full collection is loading
#[component]
pub fn LeagueGridSkeleton(
    #[prop(default = 6)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
            {(0..count).map(|_| view! { <CardSkeleton /> }).collect_view()}
        </div>
    }
}
