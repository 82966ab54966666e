//! League Card Component
//!
//! Displays a single league; clicking the card requests its badge.

use leptos::*;

use crate::components::InlineLoading;
use crate::state::{League, LeaguesStore};

/// League card component
#[component]
pub fn LeagueCard(league: League) -> impl IntoView {
    let store = use_context::<LeaguesStore>().expect("LeaguesStore not found");

    let id = league.id.clone();
    let badge_id = league.id.clone();
    let loading_id = league.id.clone();
    let click_store = store.clone();
    let badge_store = store.clone();
    let loading_store = store.clone();

    // Track the badge through the collection signal so a completed fetch
    // shows up without waiting for the list to re-render.
    let badge = create_memo(move |_| {
        badge_store.leagues.with(|leagues| {
            leagues.as_ref().and_then(|leagues| {
                leagues
                    .iter()
                    .find(|l| l.id == badge_id)
                    .and_then(|l| l.badge_url.clone())
            })
        })
    });

    let badge_loading = create_memo(move |_| loading_store.is_badge_loading(&loading_id));

    let on_click = move |_| {
        let store = click_store.clone();
        let id = id.clone();
        spawn_local(async move {
            store.fetch_league_badge(&id).await;
        });
    };

    view! {
        <div
            on:click=on_click
            class="bg-gray-800 rounded-lg p-4 hover:bg-gray-750 transition cursor-pointer
                   border border-gray-700 hover:border-gray-600"
        >
            <div class="flex items-center justify-between">
                <span class="text-lg font-semibold">
                    {league.name.clone().unwrap_or_default()}
                </span>
                {league.sport.clone().map(|sport| view! {
                    <span class="text-xs text-gray-400 bg-gray-700 rounded px-2 py-1">{sport}</span>
                })}
            </div>

            {league.alternate_name.clone().filter(|alt| !alt.is_empty()).map(|alt| view! {
                <p class="text-sm text-gray-400 mt-1">{alt}</p>
            })}

            // Badge area: image once loaded, spinner while in flight,
            // hint otherwise
            <div class="mt-3 h-16 flex items-center">
                {move || {
                    if let Some(url) = badge.get() {
                        view! {
                            <img src=url alt="League badge" class="h-16 object-contain" />
                        }
                        .into_view()
                    } else if badge_loading.get() {
                        view! { <InlineLoading /> }.into_view()
                    } else {
                        view! {
                            <span class="text-xs text-gray-500">"Click to load badge"</span>
                        }
                        .into_view()
                    }
                }}
            </div>
        </div>
    }
}
