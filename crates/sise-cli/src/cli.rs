//! CLI definition using clap

use clap::{Parser, Subcommand};
use sise_types::{OutputFormat, SortDirection, ViewMode, YearRangeScope};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sise-checker")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Used-car price lookup by manufacturer and model (중고차 최신시세조회)")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Listing source (.xlsx or .csv). Uses config value if not specified.
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Worksheet name for spreadsheet sources. Uses config value if not specified.
    #[arg(long, global = true)]
    pub sheet: Option<String>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List manufacturers (제조사)
    Manufacturers,

    /// List models of a manufacturer with their model-year range
    Models {
        /// Manufacturer name (e.g., "현대")
        manufacturer: String,

        /// Rows used for the year range. Uses config value if not specified.
        #[arg(long)]
        scope: Option<YearRangeScope>,
    },

    /// Show average prices for a manufacturer and model
    Show {
        /// Manufacturer name (e.g., "현대")
        manufacturer: String,

        /// Model name (e.g., "아반떼")
        model: String,

        /// Group by model year or mileage bucket
        #[arg(long, value_enum, default_value_t = ViewMode::Year)]
        view: ViewMode,

        /// Order of the mileage view. Uses config value if not specified.
        #[arg(long)]
        sort: Option<SortDirection>,

        /// Also print the individual listings (개별 매물)
        #[arg(long)]
        listings: bool,
    },

    /// Export both views and the listings to Excel
    Export {
        /// Manufacturer name
        manufacturer: String,

        /// Model name
        model: String,

        /// Output Excel file path
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Order of the mileage view. Uses config value if not specified.
        #[arg(long)]
        sort: Option<SortDirection>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set listing source path
        #[arg(long)]
        set_data: Option<PathBuf>,

        /// Set worksheet name
        #[arg(long)]
        set_sheet: Option<String>,

        /// Set default order of the mileage view
        #[arg(long)]
        set_mileage_sort: Option<SortDirection>,

        /// Set default year range scope for model lists
        #[arg(long)]
        set_year_scope: Option<YearRangeScope>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
