//! Header Component
//!
//! Brand bar at the top of the page.

use leptos::*;

/// Page header component
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🏆"</span>
                        <span class="text-xl font-bold text-white">"Leaguedex"</span>
                    </div>

                    <span class="text-sm text-gray-400">"Sports leagues from TheSportsDB"</span>
                </div>
            </div>
        </header>
    }
}
