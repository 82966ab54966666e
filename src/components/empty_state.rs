//! Empty State Component
//!
//! Placeholder shown when no leagues match the active filters.

use leptos::*;

/// Empty state component
#[component]
pub fn EmptyState(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-16 text-center">
            <div class="text-5xl mb-4">"🔍"</div>
            <p class="text-gray-400">{message}</p>
        </div>
    }
}
