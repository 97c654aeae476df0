use serde::Serialize;
use sise_types::SortDirection;

use super::{GroupedPrice, Listing, ListingSummary, Selection};

/// Everything rendered for one selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceDashboard {
    pub selection: Selection,
    /// Direction the series was sorted in
    pub direction: SortDirection,
    pub listings: Vec<Listing>,
    pub series: Vec<GroupedPrice>,
    /// `None` when no listing matched
    pub summary: Option<ListingSummary>,
    /// `None` when no listing matched
    pub sentence: Option<String>,
}

impl PriceDashboard {
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
