//! Selection enums shared by the engine, the config file and the CLI

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the price series is keyed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Average price per model year (연식별)
    #[default]
    Year,
    /// Average price per mileage bucket (키로수별)
    Mileage,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Year => "연식별",
            ViewMode::Mileage => "키로수별",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Year => write!(f, "year"),
            ViewMode::Mileage => write!(f, "mileage"),
        }
    }
}

/// Ordering of grouped keys
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    #[value(alias = "asc")]
    Ascending,
    #[value(alias = "desc")]
    Descending,
}

impl SortDirection {
    /// Apply this direction to an ascending comparison
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Which rows contribute to a model's (min year, max year) range
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearRangeScope {
    /// Every row carrying the model name, whatever the manufacturer
    #[default]
    Global,
    /// Only rows of the selected manufacturer
    Manufacturer,
}

impl std::fmt::Display for YearRangeScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearRangeScope::Global => write!(f, "global"),
            YearRangeScope::Manufacturer => write!(f, "manufacturer"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_sort_direction_apply() {
        assert_eq!(SortDirection::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Descending.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Descending.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&ViewMode::Mileage).unwrap(), "\"mileage\"");
        assert_eq!(
            serde_json::to_string(&SortDirection::Descending).unwrap(),
            "\"descending\""
        );
        assert_eq!(
            serde_json::to_string(&YearRangeScope::Manufacturer).unwrap(),
            "\"manufacturer\""
        );
    }

    #[test]
    fn test_value_enum_aliases() {
        assert_eq!(
            SortDirection::from_str("desc", true).unwrap(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::from_str("asc", true).unwrap(),
            SortDirection::Ascending
        );
    }
}
