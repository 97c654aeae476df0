//! Listing aggregation engine
//!
//! Pure functions over an immutable [`ListingTable`]: selection lists, the
//! manufacturer/model filter, mileage bucketing, grouped averages and the
//! summary metrics shown for a selection.

use std::collections::{BTreeMap, BTreeSet};

use sise_types::{Error, Result, SortDirection, YearRangeScope};

use super::format::format_manwon;
use crate::model::{
    GroupKey, GroupedPrice, Listing, ListingSummary, ListingTable, ManufacturerEntry,
    MileageBucket, MileageBuckets, ModelEntry, MILEAGE_BUCKET_WIDTH_KM,
};

/// Key used by [`group_and_average`]
#[derive(Debug, Clone, Copy)]
pub enum GroupBy<'a> {
    Year,
    Mileage(&'a MileageBuckets),
}

/// A listing paired with the bucket its mileage falls in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketedListing<'a> {
    pub listing: &'a Listing,
    pub bucket: MileageBucket,
}

/// Distinct manufacturers, sorted, with their listing counts
pub fn list_manufacturers(table: &ListingTable) -> Vec<ManufacturerEntry> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for listing in table.iter().filter(|l| l.is_selectable()) {
        *counts.entry(listing.manufacturer.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(name, listing_count)| ManufacturerEntry {
            name: name.to_string(),
            listing_count,
        })
        .collect()
}

/// Models sold under `manufacturer`, sorted, each with its model-year range.
///
/// With [`YearRangeScope::Global`] the range covers every row carrying the model
/// name, including rows of other manufacturers.
pub fn list_models(
    table: &ListingTable,
    manufacturer: &str,
    scope: YearRangeScope,
) -> Vec<ModelEntry> {
    if manufacturer.is_empty() {
        return Vec::new();
    }

    let names: BTreeSet<&str> = table
        .iter()
        .filter(|l| l.is_selectable() && l.manufacturer == manufacturer)
        .map(|l| l.model.as_str())
        .collect();

    names
        .into_iter()
        .filter_map(|name| {
            let (min_year, max_year) = year_range(table, manufacturer, name, scope)?;
            Some(ModelEntry {
                name: name.to_string(),
                min_year,
                max_year,
            })
        })
        .collect()
}

fn year_range(
    table: &ListingTable,
    manufacturer: &str,
    model: &str,
    scope: YearRangeScope,
) -> Option<(i32, i32)> {
    table
        .iter()
        .filter(|l| l.model == model)
        .filter(|l| scope == YearRangeScope::Global || l.manufacturer == manufacturer)
        .map(|l| l.model_year)
        .fold(None, |range, year| match range {
            None => Some((year, year)),
            Some((lo, hi)) => Some((lo.min(year), hi.max(year))),
        })
}

/// Rows matching both manufacturer and model exactly
pub fn filter_listings(table: &ListingTable, manufacturer: &str, model: &str) -> Vec<Listing> {
    table
        .iter()
        .filter(|l| l.matches(manufacturer, model))
        .cloned()
        .collect()
}

/// Buckets spanning the whole table's mileage range.
///
/// Always computed on the full table so bucket boundaries do not move when the
/// selection changes. Fails with [`Error::MileageOutOfRange`] when a row is
/// above the supported maximum.
pub fn compute_mileage_buckets(table: &ListingTable) -> Result<MileageBuckets> {
    MileageBuckets::covering(table.max_mileage().unwrap_or(0), MILEAGE_BUCKET_WIDTH_KM)
}

/// Pair each listing with its bucket, in a new query-local vector.
///
/// Listings beyond the covered range are dropped; that only happens when the
/// buckets were computed over a different table.
pub fn tag_mileage_buckets<'a>(
    subset: &'a [Listing],
    buckets: &MileageBuckets,
) -> Vec<BucketedListing<'a>> {
    subset
        .iter()
        .filter_map(|listing| match buckets.locate(listing.mileage_km) {
            Some(bucket) => Some(BucketedListing { listing, bucket }),
            None => {
                tracing::debug!(
                    mileage_km = listing.mileage_km,
                    upper_km = buckets.upper_km(),
                    "listing outside mileage buckets"
                );
                None
            }
        })
        .collect()
}

/// Mean price per group, sorted by key in `direction`.
///
/// Only groups with at least one listing are emitted.
pub fn group_and_average(
    subset: &[Listing],
    group_by: GroupBy<'_>,
    direction: SortDirection,
) -> Vec<GroupedPrice> {
    let mut groups: BTreeMap<GroupKey, (f64, usize)> = BTreeMap::new();
    let mut add = |key: GroupKey, price: f64| {
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += price;
        entry.1 += 1;
    };

    match group_by {
        GroupBy::Year => {
            for listing in subset {
                add(GroupKey::Year(listing.model_year), listing.price);
            }
        }
        GroupBy::Mileage(buckets) => {
            for tagged in tag_mileage_buckets(subset, buckets) {
                add(GroupKey::Mileage(tagged.bucket), tagged.listing.price);
            }
        }
    }

    let mut series: Vec<GroupedPrice> = groups
        .into_iter()
        .map(|(key, (sum, count))| GroupedPrice {
            key,
            label: key.label(),
            mean_price: sum / count as f64,
            count,
        })
        .collect();
    series.sort_by(|a, b| direction.apply(a.key.cmp(&b.key)));
    series
}

/// Mean year, mean mileage (both truncated) and row count.
///
/// Fails with [`Error::EmptySelection`] on an empty subset.
pub fn summarize(subset: &[Listing]) -> Result<ListingSummary> {
    if subset.is_empty() {
        return Err(Error::EmptySelection);
    }

    let count = subset.len();
    let year_sum: i64 = subset.iter().map(|l| i64::from(l.model_year)).sum();
    let mileage_sum: u128 = subset.iter().map(|l| u128::from(l.mileage_km)).sum();

    Ok(ListingSummary {
        mean_year: (year_sum as f64 / count as f64).trunc() as i32,
        mean_mileage_km: (mileage_sum as f64 / count as f64).trunc() as u64,
        count,
    })
}

/// By-year sentence, e.g. `아반떼 평균 시세는 2020년식 1,000만원, 2019년식 900만원입니다.`
///
/// Built from the same by-year series the chart uses.
pub fn build_summary_sentence(subset: &[Listing], model_name: &str) -> Result<String> {
    let series = group_and_average(subset, GroupBy::Year, SortDirection::Descending);
    if series.is_empty() {
        return Err(Error::EmptySelection);
    }
    Ok(sentence_from_series(model_name, &series))
}

/// Render an already-aggregated by-year series as the summary sentence
pub fn sentence_from_series(model_name: &str, series: &[GroupedPrice]) -> String {
    let parts: Vec<String> = series
        .iter()
        .map(|g| format!("{} {}만원", g.label, format_manwon(g.mean_price)))
        .collect();
    format!("{} 평균 시세는 {}입니다.", model_name, parts.join(", "))
}
