//! Application Layer
//!
//! Orchestrates between the CLI and the domain/infrastructure layers.
//!
//! - `listing_service`: load the listing source once and answer price queries

pub mod listing_service;

pub use listing_service::{ListingService, PriceViews, QueryOptions};
