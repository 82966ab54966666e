//! UI Components
//!
//! Reusable Leptos components for the league browser.

pub mod empty_state;
pub mod filters;
pub mod header;
pub mod league_card;
pub mod loading;

pub use empty_state::EmptyState;
pub use filters::LeaguesFilters;
pub use header::Header;
pub use league_card::LeagueCard;
pub use loading::{InlineLoading, LeagueGridSkeleton};
