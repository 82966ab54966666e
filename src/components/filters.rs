//! Filters Component
//!
//! Free-text search and sport dropdown wired to the league store.

use leptos::*;

use crate::state::LeaguesStore;

/// Filter bar combining the search input and the sport dropdown.
#[component]
pub fn LeaguesFilters() -> impl IntoView {
    view! {
        <div class="flex flex-col sm:flex-row gap-4">
            <SearchInput />
            <SportDropdown />
        </div>
    }
}

/// Search input for filtering leagues by name.
#[component]
fn SearchInput() -> impl IntoView {
    let store = use_context::<LeaguesStore>().expect("LeaguesStore not found");
    let input_store = store.clone();

    view! {
        <input
            type="text"
            placeholder="Search leagues..."
            prop:value=move || store.search_query.get()
            on:input=move |ev| input_store.set_search_query(event_target_value(&ev))
            class="flex-1 bg-gray-700 rounded-lg px-4 py-3 text-white placeholder-gray-400
                   border border-gray-600 focus:border-primary-500 focus:outline-none"
        />
    }
}

/// Sport dropdown populated from the sports present in the collection.
#[component]
fn SportDropdown() -> impl IntoView {
    let store = use_context::<LeaguesStore>().expect("LeaguesStore not found");
    let change_store = store.clone();
    let options_store = store.clone();

    view! {
        <select
            on:change=move |ev| change_store.set_sport_filter(event_target_value(&ev))
            prop:value=move || store.selected_sport.get()
            class="bg-gray-700 rounded-lg px-4 py-3 text-white
                   border border-gray-600 focus:border-primary-500 focus:outline-none"
        >
            {move || {
                options_store
                    .sport_options()
                    .into_iter()
                    .map(|sport| {
                        let value = sport.clone();
                        view! { <option value=value>{sport}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}
