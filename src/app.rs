//! App Root Component
//!
//! Main application component: provides the league store and renders the
//! single browsing page.

use std::rc::Rc;

use leptos::*;

use crate::api::SportsDbClient;
use crate::components::{EmptyState, Header, LeagueCard, LeagueGridSkeleton, LeaguesFilters};
use crate::state::{provide_leagues_store, LeaguesStore};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the league store to all components
    provide_leagues_store(Rc::new(SportsDbClient::default()));

    let store = use_context::<LeaguesStore>().expect("LeaguesStore not found");

    // Fetch the catalog on mount
    let fetch_store = store.clone();
    create_effect(move |_| {
        let store = fetch_store.clone();
        spawn_local(async move {
            store.fetch_leagues().await;
        });
    });

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header />

            <main class="flex-1 container mx-auto px-4 py-8 space-y-6">
                <LeaguesFilters />
                <ErrorBanner />
                <LeaguesList />
            </main>
        </div>
    }
}

/// Error banner with a manual retry button
#[component]
fn ErrorBanner() -> impl IntoView {
    let store = use_context::<LeaguesStore>().expect("LeaguesStore not found");
    let retry_store = store.clone();

    view! {
        {move || {
            store.error.get().map(|message| {
                let retry = retry_store.clone();
                view! {
                    <div class="bg-red-900/40 border border-red-700 rounded-lg px-4 py-3
                                flex items-center justify-between">
                        <span class="text-red-300">{message}</span>
                        <button
                            type="button"
                            on:click=move |_| {
                                let store = retry.clone();
                                spawn_local(async move {
                                    store.fetch_leagues().await;
                                });
                            }
                            class="px-3 py-1 bg-red-700 hover:bg-red-600 rounded text-sm
                                   transition-colors"
                        >
                            "Retry"
                        </button>
                    </div>
                }
            })
        }}
    }
}

/// Filtered league grid, with skeletons during the fetch and an empty state
/// when nothing matches.
#[component]
fn LeaguesList() -> impl IntoView {
    let store = use_context::<LeaguesStore>().expect("LeaguesStore not found");

    view! {
        {move || {
            if store.loading.get() {
                return view! { <LeagueGridSkeleton /> }.into_view();
            }

            let leagues = store.filtered_leagues();
            if leagues.is_empty() {
                view! { <EmptyState message="No leagues match your filters." /> }.into_view()
            } else {
                view! {
                    <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                        {leagues
                            .into_iter()
                            .map(|league| view! { <LeagueCard league=league /> })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }
        }}
    }
}
