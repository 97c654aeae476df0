//! Configuration management for sise-checker
//!
//! Config stored at: ~/.config/sise-checker/config.json

use serde::{Deserialize, Serialize};
use sise_infra::ColumnMapping;
use sise_types::{ConfigError, OutputFormat, Result, SortDirection, YearRangeScope};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Listing source (.xlsx or .csv)
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Worksheet to read from spreadsheet sources
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,

    /// Source header names
    #[serde(default)]
    pub columns: ColumnMapping,

    /// Order of the by-mileage series
    #[serde(default)]
    pub mileage_sort: SortDirection,

    /// Rows used for a model's year range in the model list
    #[serde(default)]
    pub year_range_scope: YearRangeScope,

    /// Default output format (json, table)
    #[serde(default = "default_output_format")]
    pub output_format: OutputFormat,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("used_cars.xlsx")
}

fn default_sheet_name() -> String {
    "Sheet1".to_string()
}

fn default_output_format() -> OutputFormat {
    OutputFormat::Table
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            sheet_name: default_sheet_name(),
            columns: ColumnMapping::default(),
            mileage_sort: SortDirection::default(),
            year_range_scope: YearRangeScope::default(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("sise-checker");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sise Checker Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(f, "Data file:        {}", self.data_path.display())?;
        writeln!(f, "Sheet:            {}", self.sheet_name)?;
        writeln!(
            f,
            "Columns:          {}",
            self.columns.required().join(", ")
        )?;
        writeln!(f, "Mileage sort:     {}", self.mileage_sort)?;
        writeln!(f, "Year range scope: {}", self.year_range_scope)?;
        writeln!(f, "Output format:    {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.mileage_sort, SortDirection::Ascending);
        assert_eq!(config.year_range_scope, YearRangeScope::Global);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            data_path: PathBuf::from("/data/cars.csv"),
            mileage_sort: SortDirection::Descending,
            year_range_scope: YearRangeScope::Manufacturer,
            output_format: OutputFormat::Json,
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"mileage_sort": "descending"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.mileage_sort, SortDirection::Descending);
        assert_eq!(config.sheet_name, "Sheet1");
        assert_eq!(config.data_path, PathBuf::from("used_cars.xlsx"));
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            sise_types::Error::Config(ConfigError::ParseError(_))
        ));
    }
}
