//! League Collection Store
//!
//! Reactive state management using Leptos signals. The store owns the
//! fetched league collection, the fetch lifecycle flags, per-league badge
//! loading state, and the user's filter criteria. All mutation goes through
//! the store's actions; components only read signals and call actions.

use std::collections::HashMap;
use std::rc::Rc;

use leptos::*;

use crate::api::{BadgeLookup, CatalogGateway};

/// Sentinel filter value meaning "no sport restriction".
pub const ALL_SPORTS: &str = "All Sports";

/// One sports league as returned by the catalog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct League {
    #[serde(rename = "idLeague")]
    pub id: String,
    /// Display name. The upstream occasionally serves null here; a league
    /// without a name never matches a text search.
    #[serde(rename = "strLeague", default)]
    pub name: Option<String>,
    #[serde(rename = "strLeagueAlternate", default)]
    pub alternate_name: Option<String>,
    #[serde(rename = "strSport", default)]
    pub sport: Option<String>,
    /// Populated lazily by the badge fetch, never by the catalog fetch.
    #[serde(rename = "strBadge", default)]
    pub badge_url: Option<String>,
}

/// Shared league store provided to the component tree.
#[derive(Clone)]
pub struct LeaguesStore {
    gateway: Rc<dyn CatalogGateway>,
    /// Last fetched collection, replaced wholesale on every successful
    /// fetch. `None` when the upstream answered `leagues: null`.
    pub leagues: RwSignal<Option<Vec<League>>>,
    /// True strictly while a full-collection fetch is in flight.
    pub loading: RwSignal<bool>,
    /// Message of the last failed full-collection fetch.
    pub error: RwSignal<Option<String>>,
    /// Per-league badge fetch flags. Entries are set to false when a fetch
    /// settles, never removed.
    pub loading_badges: RwSignal<HashMap<String, bool>>,
    pub search_query: RwSignal<String>,
    pub selected_sport: RwSignal<String>,
}

/// Construct the store and provide it to the component tree.
pub fn provide_leagues_store(gateway: Rc<dyn CatalogGateway>) {
    provide_context(LeaguesStore::new(gateway));
}

impl LeaguesStore {
    pub fn new(gateway: Rc<dyn CatalogGateway>) -> Self {
        Self {
            gateway,
            leagues: create_rw_signal(Some(Vec::new())),
            loading: create_rw_signal(false),
            error: create_rw_signal(None),
            loading_badges: create_rw_signal(HashMap::new()),
            search_query: create_rw_signal(String::new()),
            selected_sport: create_rw_signal(String::new()),
        }
    }

    /// Fetch the full league collection.
    ///
    /// On failure the previous collection is kept so the user still sees
    /// the last known good data. `loading` is cleared on every exit path.
    pub async fn fetch_leagues(&self) {
        self.loading.set(true);
        self.error.set(None);

        match self.gateway.fetch_league_catalog().await {
            Ok(catalog) => self.leagues.set(catalog),
            Err(e) => self.error.set(Some(e.to_string())),
        }

        self.loading.set(false);
    }

    /// Fetch the badge for one league and patch it into the collection.
    ///
    /// At most one badge fetch per league id is in flight; duplicate
    /// requests while one is pending are dropped, not queued. Failures are
    /// logged to the console only and never surfaced to `error`.
    pub async fn fetch_league_badge(&self, league_id: &str) {
        let in_flight = self
            .loading_badges
            .with_untracked(|flags| flags.get(league_id).copied().unwrap_or(false));
        if in_flight {
            return;
        }

        self.loading_badges.update(|flags| {
            flags.insert(league_id.to_string(), true);
        });

        match self.gateway.fetch_latest_badge(league_id).await {
            Ok(BadgeLookup::Found(url)) if !url.is_empty() => {
                self.leagues.update(|leagues| {
                    let Some(leagues) = leagues.as_mut() else { return };
                    // A concurrent refetch may have dropped the id; that is
                    // not an error, the badge is simply discarded.
                    if let Some(entry) = leagues.iter_mut().find(|l| l.id == league_id) {
                        *entry = League {
                            badge_url: Some(url),
                            ..entry.clone()
                        };
                    }
                });
            }
            Ok(_) => {}
            Err(e) => {
                logging::error!("failed to fetch badge for league {league_id}: {e}");
            }
        }

        self.loading_badges.update(|flags| {
            flags.insert(league_id.to_string(), false);
        });
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.search_query.set(query.into());
    }

    pub fn set_sport_filter(&self, sport: impl Into<String>) {
        self.selected_sport.set(sport.into());
    }

    /// True while the badge fetch for `league_id` is in flight.
    pub fn is_badge_loading(&self, league_id: &str) -> bool {
        self.loading_badges
            .with(|flags| flags.get(league_id).copied().unwrap_or(false))
    }

    /// Leagues passing both active filters, in collection order.
    ///
    /// The text filter is a case-insensitive substring match on the name.
    /// The query is trimmed only to decide whether the filter is active at
    /// all; matching uses the query as typed, whitespace included. The
    /// sport filter is an exact match unless it is empty or the
    /// "All Sports" sentinel.
    pub fn filtered_leagues(&self) -> Vec<League> {
        let query = self.search_query.with(|q| q.to_lowercase());
        let query_active = !query.trim().is_empty();
        let sport = self.selected_sport.get();
        let sport_active = !sport.is_empty() && sport != ALL_SPORTS;

        self.leagues.with(|leagues| {
            let Some(leagues) = leagues.as_ref() else {
                return Vec::new();
            };

            leagues
                .iter()
                .filter(|league| {
                    let matches_query = !query_active
                        || league
                            .name
                            .as_ref()
                            .is_some_and(|name| name.to_lowercase().contains(&query));
                    let matches_sport =
                        !sport_active || league.sport.as_deref() == Some(sport.as_str());
                    matches_query && matches_sport
                })
                .cloned()
                .collect()
        })
    }

    /// Dropdown options: the "All Sports" sentinel followed by the distinct
    /// sports present in the collection, in first-seen order.
    pub fn sport_options(&self) -> Vec<String> {
        let mut options = vec![ALL_SPORTS.to_string()];

        self.leagues.with(|leagues| {
            let Some(leagues) = leagues.as_ref() else { return };
            for league in leagues {
                if let Some(sport) = &league.sport {
                    if !sport.is_empty() && !options.contains(sport) {
                        options.push(sport.clone());
                    }
                }
            }
        });

        options
    }
}
