//! Domain model types

pub mod bucket;
pub mod dashboard;
pub mod listing;
pub mod selection;
pub mod summary;
pub mod table;

pub use bucket::{MileageBucket, MileageBuckets, MAX_MILEAGE_KM, MILEAGE_BUCKET_WIDTH_KM};
pub use dashboard::PriceDashboard;
pub use listing::Listing;
pub use selection::Selection;
pub use summary::{GroupKey, GroupedPrice, ListingSummary, ManufacturerEntry, ModelEntry};
pub use table::ListingTable;
