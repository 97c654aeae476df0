//! Repository adapters for the listing source

use sise_infra::persistence::FileListingRepository;

use crate::config::Config;

/// Open the configured listing source
pub fn open_listing_repo(config: &Config) -> FileListingRepository {
    FileListingRepository::new(
        config.data_path.clone(),
        config.sheet_name.clone(),
        config.columns.clone(),
    )
}

