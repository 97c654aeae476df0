//! Error types for sise-checker

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Errors raised while loading the listing source
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to parse CSV: {0}")]
    Csv(String),

    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Unsupported source format: {0} (expected .xlsx, .xlsm, .xls, .ods or .csv)")]
    UnsupportedFormat(String),

    #[error(
        "Missing required columns: {} (required: {})",
        .missing.join(", "),
        .required.join(", ")
    )]
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
    },

    #[error("Source has no header row")]
    EmptySource,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("No listings match the current selection")]
    EmptySelection,

    #[error("Mileage {mileage_km} km exceeds the supported maximum of {max_km} km")]
    MileageOutOfRange { mileage_km: u64, max_km: u64 },

    #[error("Excel export error: {0}")]
    Excel(String),
}

pub type Result<T> = std::result::Result<T, Error>;
