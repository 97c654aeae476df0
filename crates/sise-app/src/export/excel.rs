//! Excel export functionality

use crate::app::PriceViews;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use sise_domain::model::{GroupedPrice, PriceDashboard};
use sise_types::{Error, Result};
use std::path::Path;

fn xlsx_err(e: XlsxError) -> Error {
    Error::Excel(e.to_string())
}

/// Export both views of a manufacturer/model pair to an Excel file
pub fn export_to_excel(views: &PriceViews, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary_sheet = workbook.add_worksheet();
    write_summary_sheet(summary_sheet, &views.by_year)?;

    let year_sheet = workbook.add_worksheet();
    write_series_sheet(year_sheet, "By Year", "연식", &views.by_year.series)?;

    let mileage_sheet = workbook.add_worksheet();
    write_series_sheet(mileage_sheet, "By Mileage", "키로수", &views.by_mileage.series)?;

    let listings_sheet = workbook.add_worksheet();
    write_listings_sheet(listings_sheet, &views.by_year)?;

    workbook.save(output_path).map_err(xlsx_err)?;

    tracing::info!(
        path = %output_path.display(),
        listings = views.by_year.listings.len(),
        "exported price report"
    );
    Ok(())
}

fn write_summary_sheet(sheet: &mut Worksheet, dashboard: &PriceDashboard) -> Result<()> {
    sheet.set_name("Summary").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();

    sheet
        .write_string_with_format(0, 0, "중고차 시세 리포트", &header_format)
        .map_err(xlsx_err)?;

    sheet.write_string(2, 0, "제조사").map_err(xlsx_err)?;
    sheet
        .write_string(2, 1, &dashboard.selection.manufacturer)
        .map_err(xlsx_err)?;
    sheet.write_string(3, 0, "모델").map_err(xlsx_err)?;
    sheet
        .write_string(3, 1, &dashboard.selection.model)
        .map_err(xlsx_err)?;
    sheet.write_string(4, 0, "Exported at").map_err(xlsx_err)?;
    sheet
        .write_string(4, 1, Local::now().to_rfc3339())
        .map_err(xlsx_err)?;

    match &dashboard.summary {
        Some(summary) => {
            sheet.write_string(6, 0, "평균 연식").map_err(xlsx_err)?;
            sheet
                .write_number(6, 1, summary.mean_year)
                .map_err(xlsx_err)?;
            sheet.write_string(7, 0, "평균 키로수 (km)").map_err(xlsx_err)?;
            sheet
                .write_number(7, 1, summary.mean_mileage_km as f64)
                .map_err(xlsx_err)?;
            sheet.write_string(8, 0, "매물 수").map_err(xlsx_err)?;
            sheet
                .write_number(8, 1, summary.count as f64)
                .map_err(xlsx_err)?;
        }
        None => {
            sheet
                .write_string(6, 0, "해당 조건의 매물이 없습니다.")
                .map_err(xlsx_err)?;
        }
    }

    if let Some(sentence) = &dashboard.sentence {
        sheet
            .write_string_with_format(10, 0, "요약", &header_format)
            .map_err(xlsx_err)?;
        sheet.write_string(11, 0, sentence).map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 18).map_err(xlsx_err)?;
    sheet.set_column_width(1, 28).map_err(xlsx_err)?;

    Ok(())
}

fn write_series_sheet(
    sheet: &mut Worksheet,
    name: &str,
    key_header: &str,
    series: &[GroupedPrice],
) -> Result<()> {
    sheet.set_name(name).map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let price_format = Format::new().set_num_format("#,##0");

    let headers = [key_header, "평균 시세 (만원)", "매물 수"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (row_idx, group) in series.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet.write_string(row, 0, &group.label).map_err(xlsx_err)?;
        // Full precision; the cell format rounds for display
        sheet
            .write_number_with_format(row, 1, group.mean_price, &price_format)
            .map_err(xlsx_err)?;
        sheet
            .write_number(row, 2, group.count as f64)
            .map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 14).map_err(xlsx_err)?;
    sheet.set_column_width(1, 16).map_err(xlsx_err)?;

    Ok(())
}

fn write_listings_sheet(sheet: &mut Worksheet, dashboard: &PriceDashboard) -> Result<()> {
    sheet.set_name("Listings").map_err(xlsx_err)?;

    let header_format = Format::new().set_bold();
    let number_format = Format::new().set_num_format("#,##0");

    let headers = ["회사", "모델", "연식", "키로수 (km)", "가격 (만원)"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(xlsx_err)?;
    }

    for (row_idx, listing) in dashboard.listings.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        sheet
            .write_string(row, 0, &listing.manufacturer)
            .map_err(xlsx_err)?;
        sheet.write_string(row, 1, &listing.model).map_err(xlsx_err)?;
        sheet
            .write_number(row, 2, listing.model_year)
            .map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 3, listing.mileage_km as f64, &number_format)
            .map_err(xlsx_err)?;
        sheet
            .write_number_with_format(row, 4, listing.price, &number_format)
            .map_err(xlsx_err)?;
    }

    sheet.set_column_width(0, 12).map_err(xlsx_err)?;
    sheet.set_column_width(1, 20).map_err(xlsx_err)?;
    sheet.set_column_width(3, 14).map_err(xlsx_err)?;

    Ok(())
}
