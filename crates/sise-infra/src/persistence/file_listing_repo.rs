//! File-based implementation of ListingRepository

use std::path::{Path, PathBuf};

use sise_domain::repository::{ListingRepository, LoadedListings};
use sise_types::Error;

use crate::columns::ColumnMapping;
use crate::listing_loader::load_listings;

/// Listing source backed by a spreadsheet or CSV file
#[derive(Debug, Clone)]
pub struct FileListingRepository {
    path: PathBuf,
    sheet: String,
    columns: ColumnMapping,
}

impl FileListingRepository {
    pub fn new(path: PathBuf, sheet: impl Into<String>, columns: ColumnMapping) -> Self {
        Self {
            path,
            sheet: sheet.into(),
            columns,
        }
    }

    /// Get the source path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ListingRepository for FileListingRepository {
    fn load(&self) -> Result<LoadedListings, Error> {
        load_listings(&self.path, &self.sheet, &self.columns)
    }
}
