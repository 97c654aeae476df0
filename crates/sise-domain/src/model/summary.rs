//! Aggregation outputs

use serde::Serialize;

use super::MileageBucket;

/// A manufacturer offered in the first selection list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManufacturerEntry {
    pub name: String,
    pub listing_count: usize,
}

/// A model offered for a manufacturer, with the model-year range it spans
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    pub name: String,
    pub min_year: i32,
    pub max_year: i32,
}

impl ModelEntry {
    /// e.g. `쏘나타 (2016년~2020년식)`
    pub fn label(&self) -> String {
        format!("{} ({}년~{}년식)", self.name, self.min_year, self.max_year)
    }
}

/// Key of one group in a price series
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKey {
    Year(i32),
    Mileage(MileageBucket),
}

impl GroupKey {
    pub fn label(&self) -> String {
        match self {
            GroupKey::Year(year) => format!("{}년식", year),
            GroupKey::Mileage(bucket) => bucket.label(),
        }
    }
}

/// One (key, mean price) row of a grouped series.
///
/// `mean_price` keeps full precision; rounding happens only when rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedPrice {
    pub key: GroupKey,
    pub label: String,
    pub mean_price: f64,
    pub count: usize,
}

/// Summary metrics of a non-empty subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListingSummary {
    /// Mean model year, truncated
    pub mean_year: i32,
    /// Mean mileage in km, truncated
    pub mean_mileage_km: u64,
    pub count: usize,
}
