//! Output formatting module

use sise_domain::model::{Listing, ManufacturerEntry, ModelEntry, PriceDashboard};
use sise_domain::service::format::{format_manwon, format_thousands};
use sise_domain::service::generate_price_report;
use sise_types::{OutputFormat, Result};

pub fn output_manufacturers(
    output_format: OutputFormat,
    manufacturers: &[ManufacturerEntry],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(manufacturers)?);
        return Ok(());
    }

    println!("\n🚘 제조사 ({})", manufacturers.len());
    println!("==================");
    for entry in manufacturers {
        println!("  {:<16} {:>6}건", entry.name, entry.listing_count);
    }
    Ok(())
}

pub fn output_models(
    output_format: OutputFormat,
    manufacturer: &str,
    models: &[ModelEntry],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(models)?);
        return Ok(());
    }

    println!("\n🚗 {} 모델 ({})", manufacturer, models.len());
    println!("==================");
    if models.is_empty() {
        println!("  등록된 모델이 없습니다.");
    }
    for entry in models {
        println!("  {}", entry.label());
    }
    Ok(())
}

pub fn output_dashboard(
    output_format: OutputFormat,
    dashboard: &PriceDashboard,
    show_listings: bool,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(dashboard)?);
        return Ok(());
    }

    print!("\n{}", generate_price_report(dashboard));
    if show_listings && !dashboard.is_empty() {
        println!("\n📋 개별 매물 보기");
        print!("{}", render_listing_table(&dashboard.listings));
    }
    Ok(())
}

pub fn render_listing_table(listings: &[Listing]) -> String {
    let mut table = String::new();
    table.push_str("-".repeat(64).as_str());
    table.push('\n');
    table.push_str(&format!(
        "{:>4}  {:<10} {:<16} {:>6} {:>12} {:>10}\n",
        "No", "회사", "모델", "연식", "키로수(km)", "가격(만원)"
    ));
    table.push_str("-".repeat(64).as_str());
    table.push('\n');
    for (i, listing) in listings.iter().enumerate() {
        table.push_str(&format!(
            "{:>4}  {:<10} {:<16} {:>6} {:>12} {:>10}\n",
            i,
            truncate_str(&listing.manufacturer, 9),
            truncate_str(&listing.model, 15),
            listing.model_year,
            format_thousands(listing.mileage_km as i64),
            format_manwon(listing.price)
        ));
    }
    table
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
