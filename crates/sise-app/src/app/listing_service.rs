//! Listing Service - load once, query many times
//!
//! `ListingService::open` reads the source a single time, computes the global
//! mileage buckets, and keeps both for the service's lifetime. Every query takes
//! its selection as an argument and reads the shared table without modifying it.

use std::sync::Arc;

use sise_domain::model::{
    ListingTable, ManufacturerEntry, MileageBuckets, ModelEntry, PriceDashboard, Selection,
};
use sise_domain::repository::{ListingRepository, LoadReport};
use sise_domain::service::{
    build_dashboard, compute_mileage_buckets, list_manufacturers, list_models,
};
use sise_types::{Result, SortDirection, ViewMode, YearRangeScope};

use crate::config::Config;
use crate::repository::open_listing_repo;

/// Per-query settings taken from config or CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryOptions {
    pub mileage_sort: SortDirection,
    pub year_range_scope: YearRangeScope,
}

impl From<&Config> for QueryOptions {
    fn from(config: &Config) -> Self {
        Self {
            mileage_sort: config.mileage_sort,
            year_range_scope: config.year_range_scope,
        }
    }
}

/// Both views of one manufacturer/model pair
#[derive(Debug, Clone, PartialEq)]
pub struct PriceViews {
    pub by_year: PriceDashboard,
    pub by_mileage: PriceDashboard,
}

/// Read-only access to the loaded listing table
#[derive(Debug, Clone)]
pub struct ListingService {
    table: Arc<ListingTable>,
    buckets: MileageBuckets,
    report: LoadReport,
}

impl ListingService {
    /// Load the configured source
    pub fn open(config: &Config) -> Result<Self> {
        Self::from_repository(&open_listing_repo(config))
    }

    pub fn from_repository<R: ListingRepository>(repo: &R) -> Result<Self> {
        let loaded = repo.load()?;
        let service = Self::build(ListingTable::new(loaded.listings), loaded.report)?;
        tracing::info!(
            rows = service.table.len(),
            buckets = service.buckets.len(),
            "listing service ready"
        );
        Ok(service)
    }

    /// Wrap an already-built table
    pub fn from_table(table: ListingTable) -> Result<Self> {
        let report = LoadReport {
            rows_read: table.len(),
            rows_skipped: 0,
        };
        Self::build(table, report)
    }

    fn build(table: ListingTable, report: LoadReport) -> Result<Self> {
        let buckets = compute_mileage_buckets(&table)?;
        Ok(Self {
            table: Arc::new(table),
            buckets,
            report,
        })
    }

    pub fn table(&self) -> &ListingTable {
        &self.table
    }

    /// Shared handle to the table for callers that outlive a borrow
    pub fn shared_table(&self) -> Arc<ListingTable> {
        Arc::clone(&self.table)
    }

    pub fn buckets(&self) -> &MileageBuckets {
        &self.buckets
    }

    pub fn load_report(&self) -> LoadReport {
        self.report
    }

    pub fn manufacturers(&self) -> Vec<ManufacturerEntry> {
        list_manufacturers(&self.table)
    }

    pub fn models(&self, manufacturer: &str, scope: YearRangeScope) -> Vec<ModelEntry> {
        list_models(&self.table, manufacturer, scope)
    }

    /// Outputs for one selection
    pub fn query(&self, selection: &Selection, options: &QueryOptions) -> PriceDashboard {
        build_dashboard(&self.table, &self.buckets, selection, options.mileage_sort)
    }

    /// By-year and by-mileage outputs for one pair
    pub fn query_views(&self, manufacturer: &str, model: &str, options: &QueryOptions) -> PriceViews {
        PriceViews {
            by_year: self.query(&Selection::new(manufacturer, model, ViewMode::Year), options),
            by_mileage: self.query(&Selection::new(manufacturer, model, ViewMode::Mileage), options),
        }
    }
}
