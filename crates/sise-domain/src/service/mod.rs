//! Domain services

pub mod aggregation;
pub mod dashboard;
pub mod format;
pub mod report;

pub use aggregation::{
    build_summary_sentence, compute_mileage_buckets, filter_listings, group_and_average,
    list_manufacturers, list_models, summarize, tag_mileage_buckets, BucketedListing, GroupBy,
};
pub use dashboard::build_dashboard;
pub use report::generate_price_report;
