//! Infrastructure layer - listing source loaders and repositories

pub mod columns;
pub mod listing_loader;
pub mod persistence;

pub use columns::{ColumnIndex, ColumnMapping};
pub use listing_loader::{load_listings, LoadReport, LoadedListings};
