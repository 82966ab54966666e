//! HTTP API Client
//!
//! Gateway for the remote league catalog (TheSportsDB). Two read-only
//! endpoints: the full league list, and the season list for one league
//! (queried with `badge=1` to get per-season badge images).
//!
//! The gateway is stateless: no caching, no retry, no timeout beyond what
//! the browser's fetch gives us. Transport and HTTP failures propagate
//! unchanged to the caller.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use crate::state::leagues::League;

/// Base URL of the catalog API.
pub const API_BASE: &str = "https://www.thesportsdb.com/api/v1/json/3";

/// Errors raised by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP error: status {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Outcome of a badge lookup for one league.
///
/// The upstream response distinguishes "no seasons at all" from "a season
/// exists but carries no badge field", and callers care about the
/// difference, so it is kept explicit instead of collapsed into one
/// missing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeLookup {
    /// `seasons` was missing, null, or empty.
    NoSeasons,
    /// The latest season exists but has no badge field.
    SeasonWithoutBadge,
    /// Badge URL of the latest season.
    Found(String),
}

/// Gateway trait for the league catalog.
///
/// The store talks to this trait, not to the concrete client, so tests can
/// substitute a mock without touching the network.
#[async_trait(?Send)]
pub trait CatalogGateway {
    /// Fetch the full league catalog.
    ///
    /// Returns the `leagues` field of the response verbatim: `None` if the
    /// upstream answered `leagues: null`. Not coerced to an empty list.
    async fn fetch_league_catalog(&self) -> Result<Option<Vec<League>>, GatewayError>;

    /// Fetch the badge of the latest season for one league.
    async fn fetch_latest_badge(&self, league_id: &str) -> Result<BadgeLookup, GatewayError>;
}

// ============ Response Types ============

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    leagues: Option<Vec<League>>,
}

#[derive(Debug, Deserialize)]
struct SeasonsResponse {
    #[serde(default)]
    seasons: Option<Vec<Season>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Season {
    #[serde(rename = "strSeason", default)]
    pub season: Option<String>,
    #[serde(rename = "strBadge", default)]
    pub badge: Option<String>,
}

/// Pick the badge of the latest season.
///
/// "Latest" is purely positional: the upstream returns seasons oldest
/// first, and no sorting is applied here.
fn latest_badge(seasons: Option<Vec<Season>>) -> BadgeLookup {
    match seasons {
        None => BadgeLookup::NoSeasons,
        Some(seasons) if seasons.is_empty() => BadgeLookup::NoSeasons,
        Some(mut seasons) => match seasons.pop().and_then(|s| s.badge) {
            Some(url) => BadgeLookup::Found(url),
            None => BadgeLookup::SeasonWithoutBadge,
        },
    }
}

// ============ HTTP Client ============

/// Production gateway over `gloo-net` fetch.
#[derive(Debug, Clone)]
pub struct SportsDbClient {
    base: String,
}

impl Default for SportsDbClient {
    fn default() -> Self {
        Self {
            base: API_BASE.to_string(),
        }
    }
}

impl SportsDbClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, GatewayError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(GatewayError::Status(response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::Parse(e.to_string()))
    }
}

#[async_trait(?Send)]
impl CatalogGateway for SportsDbClient {
    async fn fetch_league_catalog(&self) -> Result<Option<Vec<League>>, GatewayError> {
        let response: CatalogResponse = self
            .get_json(&format!("{}/all_leagues.php", self.base))
            .await?;

        Ok(response.leagues)
    }

    async fn fetch_latest_badge(&self, league_id: &str) -> Result<BadgeLookup, GatewayError> {
        let response: SeasonsResponse = self
            .get_json(&format!(
                "{}/search_all_seasons.php?badge=1&id={}",
                self.base, league_id
            ))
            .await?;

        Ok(latest_badge(response.seasons))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn season(badge: Option<&str>) -> Season {
        Season {
            season: Some("2023-2024".to_string()),
            badge: badge.map(String::from),
        }
    }

    #[test]
    fn latest_badge_none_when_seasons_missing() {
        assert_eq!(latest_badge(None), BadgeLookup::NoSeasons);
    }

    #[test]
    fn latest_badge_none_when_seasons_empty() {
        assert_eq!(latest_badge(Some(vec![])), BadgeLookup::NoSeasons);
    }

    #[test]
    fn latest_badge_takes_last_season() {
        let seasons = vec![
            season(Some("https://example.com/badge1.png")),
            season(Some("https://example.com/badge2.png")),
        ];
        assert_eq!(
            latest_badge(Some(seasons)),
            BadgeLookup::Found("https://example.com/badge2.png".to_string())
        );
    }

    #[test]
    fn latest_badge_single_season() {
        let seasons = vec![season(Some("https://example.com/single.png"))];
        assert_eq!(
            latest_badge(Some(seasons)),
            BadgeLookup::Found("https://example.com/single.png".to_string())
        );
    }

    #[test]
    fn latest_badge_distinguishes_badgeless_season() {
        let seasons = vec![season(None)];
        assert_eq!(latest_badge(Some(seasons)), BadgeLookup::SeasonWithoutBadge);
    }

    #[test]
    fn catalog_response_maps_wire_fields() {
        let body = r#"{
            "leagues": [
                {
                    "idLeague": "4328",
                    "strLeague": "English Premier League",
                    "strLeagueAlternate": "Premier League, EPL",
                    "strSport": "Soccer"
                }
            ]
        }"#;

        let parsed: CatalogResponse = serde_json::from_str(body).unwrap();
        let leagues = parsed.leagues.unwrap();
        assert_eq!(leagues.len(), 1);
        assert_eq!(leagues[0].id, "4328");
        assert_eq!(leagues[0].name.as_deref(), Some("English Premier League"));
        assert_eq!(
            leagues[0].alternate_name.as_deref(),
            Some("Premier League, EPL")
        );
        assert_eq!(leagues[0].sport.as_deref(), Some("Soccer"));
        assert_eq!(leagues[0].badge_url, None);
    }

    #[test]
    fn catalog_response_preserves_null_leagues() {
        let parsed: CatalogResponse = serde_json::from_str(r#"{"leagues": null}"#).unwrap();
        assert!(parsed.leagues.is_none());
    }

    #[test]
    fn seasons_response_handles_absent_field() {
        let parsed: SeasonsResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(latest_badge(parsed.seasons), BadgeLookup::NoSeasons);
    }

    #[test]
    fn seasons_response_maps_wire_fields() {
        let body = r#"{
            "seasons": [
                {"strSeason": "2022-2023", "strBadge": "https://example.com/badge1.png"},
                {"strSeason": "2023-2024", "strBadge": "https://example.com/badge2.png"}
            ]
        }"#;

        let parsed: SeasonsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            latest_badge(parsed.seasons),
            BadgeLookup::Found("https://example.com/badge2.png".to_string())
        );
    }
}
