//! One selection in, every rendered output out

use sise_types::{SortDirection, ViewMode};

use super::aggregation::{
    filter_listings, group_and_average, sentence_from_series, summarize, GroupBy,
};
use crate::model::{ListingTable, MileageBuckets, PriceDashboard, Selection};

/// Build the outputs for `selection`.
///
/// By-year series are always newest first; `mileage_direction` orders the
/// by-mileage series. `buckets` must come from the full table. An unknown
/// manufacturer/model pairing yields an empty dashboard, and summary metrics are
/// only computed when at least one listing matched.
pub fn build_dashboard(
    table: &ListingTable,
    buckets: &MileageBuckets,
    selection: &Selection,
    mileage_direction: SortDirection,
) -> PriceDashboard {
    let listings = filter_listings(table, &selection.manufacturer, &selection.model);
    tracing::debug!(
        manufacturer = %selection.manufacturer,
        model = %selection.model,
        view = %selection.view,
        matched = listings.len(),
        "price query"
    );

    let by_year = group_and_average(&listings, GroupBy::Year, SortDirection::Descending);
    let (series, direction) = match selection.view {
        ViewMode::Year => (by_year.clone(), SortDirection::Descending),
        ViewMode::Mileage => (
            group_and_average(&listings, GroupBy::Mileage(buckets), mileage_direction),
            mileage_direction,
        ),
    };

    let (summary, sentence) = match summarize(&listings) {
        Ok(summary) => (
            Some(summary),
            Some(sentence_from_series(&selection.model, &by_year)),
        ),
        // summarize only fails on an empty subset
        Err(_) => (None, None),
    };

    PriceDashboard {
        selection: selection.clone(),
        direction,
        listings,
        series,
        summary,
        sentence,
    }
}
