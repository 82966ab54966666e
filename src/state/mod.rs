//! State Management
//!
//! Reactive league collection state shared by all components.

pub mod leagues;

pub use leagues::{provide_leagues_store, League, LeaguesStore, ALL_SPORTS};
