//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_dashboard, output_manufacturers, output_models};
use sise_app::app::{ListingService, QueryOptions};
use sise_app::config::Config;
use sise_app::export::export_to_excel;
use sise_domain::model::Selection;
use sise_types::{OutputFormat, Result, SortDirection, ViewMode, YearRangeScope};
use std::path::PathBuf;

pub fn execute(cli: Cli) -> Result<()> {
    // Load config
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref data) = cli.data {
        config.data_path = data.clone();
    }
    if let Some(ref sheet) = cli.sheet {
        config.sheet_name = sheet.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Manufacturers => {
            let service = ListingService::open(&config)?;
            report_skipped_rows(&service);
            output_manufacturers(output_format, &service.manufacturers())
        }
        Commands::Models {
            manufacturer,
            scope,
        } => {
            let service = ListingService::open(&config)?;
            report_skipped_rows(&service);
            let scope = scope.unwrap_or(config.year_range_scope);
            let models = service.models(&manufacturer, scope);
            if models.is_empty() {
                tracing::warn!(manufacturer = %manufacturer, "no models listed for manufacturer");
            }
            output_models(output_format, &manufacturer, &models)
        }
        Commands::Show {
            manufacturer,
            model,
            view,
            sort,
            listings,
        } => cmd_show(
            &config,
            output_format,
            &manufacturer,
            &model,
            view,
            sort,
            listings,
        ),
        Commands::Export {
            manufacturer,
            model,
            output,
            sort,
        } => cmd_export(&config, &manufacturer, &model, output, sort),
        Commands::Config {
            show,
            set_data,
            set_sheet,
            set_mileage_sort,
            set_year_scope,
            set_output,
            reset,
        } => cmd_config(
            show,
            set_data,
            set_sheet,
            set_mileage_sort,
            set_year_scope,
            set_output,
            reset,
        ),
    }
}

fn query_options(config: &Config, sort: Option<SortDirection>) -> QueryOptions {
    let mut options = QueryOptions::from(config);
    if let Some(sort) = sort {
        options.mileage_sort = sort;
    }
    options
}

fn report_skipped_rows(service: &ListingService) {
    let report = service.load_report();
    if report.rows_skipped > 0 {
        eprintln!(
            "Warning: skipped {} of {} rows with invalid values",
            report.rows_skipped, report.rows_read
        );
    }
}

fn warn_if_unlisted(service: &ListingService, manufacturer: &str, model: &str) {
    let listed = service
        .models(manufacturer, YearRangeScope::Global)
        .iter()
        .any(|entry| entry.name == model);
    if !listed {
        tracing::warn!(
            manufacturer = %manufacturer,
            model = %model,
            "model is not listed for this manufacturer"
        );
    }
}

fn cmd_show(
    config: &Config,
    output_format: OutputFormat,
    manufacturer: &str,
    model: &str,
    view: ViewMode,
    sort: Option<SortDirection>,
    show_listings: bool,
) -> Result<()> {
    let service = ListingService::open(config)?;
    report_skipped_rows(&service);
    warn_if_unlisted(&service, manufacturer, model);

    let selection = Selection::new(manufacturer, model, view);
    let dashboard = service.query(&selection, &query_options(config, sort));
    output_dashboard(output_format, &dashboard, show_listings)
}

fn cmd_export(
    config: &Config,
    manufacturer: &str,
    model: &str,
    output: Option<PathBuf>,
    sort: Option<SortDirection>,
) -> Result<()> {
    let service = ListingService::open(config)?;
    report_skipped_rows(&service);
    warn_if_unlisted(&service, manufacturer, model);

    let views = service.query_views(manufacturer, model, &query_options(config, sort));

    // Determine output path
    let output_path = output.unwrap_or_else(|| default_export_path(manufacturer, model));

    export_to_excel(&views, &output_path)?;

    println!("Exported to: {}", output_path.display());
    Ok(())
}

fn default_export_path(manufacturer: &str, model: &str) -> PathBuf {
    let name = format!("{}_{}_시세.xlsx", manufacturer, model);
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect();
    PathBuf::from(sanitized)
}

fn cmd_config(
    show: bool,
    set_data: Option<PathBuf>,
    set_sheet: Option<String>,
    set_mileage_sort: Option<SortDirection>,
    set_year_scope: Option<YearRangeScope>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(data_path) = set_data {
        config.data_path = data_path;
        modified = true;
    }

    if let Some(sheet_name) = set_sheet {
        config.sheet_name = sheet_name;
        modified = true;
    }

    if let Some(mileage_sort) = set_mileage_sort {
        config.mileage_sort = mileage_sort;
        modified = true;
    }

    if let Some(scope) = set_year_scope {
        config.year_range_scope = scope;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
