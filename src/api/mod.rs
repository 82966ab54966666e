//! Data Access
//!
//! HTTP gateway for the TheSportsDB catalog API.

pub mod client;

pub use client::{BadgeLookup, CatalogGateway, GatewayError, SportsDbClient, API_BASE};
