//! Immutable snapshot of every loaded listing

use serde::Serialize;

use super::Listing;

/// The loaded source table.
///
/// Rows are fixed at construction; there is no way to add, remove or edit a row
/// afterwards, so one table can back every query for the life of the process.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingTable {
    rows: Vec<Listing>,
}

impl ListingTable {
    pub fn new(rows: Vec<Listing>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest mileage over all rows, selectable or not
    pub fn max_mileage(&self) -> Option<u64> {
        self.rows.iter().map(|l| l.mileage_km).max()
    }
}

impl FromIterator<Listing> for ListingTable {
    fn from_iter<I: IntoIterator<Item = Listing>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ListingTable {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
