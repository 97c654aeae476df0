//! Repository trait definitions for the listing source

use serde::Serialize;
use sise_types::Error;

use crate::model::Listing;

/// Counters for one load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Non-blank data rows seen
    pub rows_read: usize,
    /// Rows dropped because a numeric cell was blank, invalid or out of range
    pub rows_skipped: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedListings {
    pub listings: Vec<Listing>,
    pub report: LoadReport,
}

/// Read-only source of listings
pub trait ListingRepository {
    /// Load every valid listing together with the skipped-row counters
    fn load(&self) -> Result<LoadedListings, Error>;

    /// Load every valid listing
    fn find_all(&self) -> Result<Vec<Listing>, Error> {
        Ok(self.load()?.listings)
    }
}
