//! Listing loader for the used-car price sheet (중고차 시세표)
//!
//! Reads spreadsheets (`.xlsx`, `.xlsm`, `.xls`, `.ods`) by sheet name and CSV
//! files. CSV exported from Korean Excel is often EUC-KR (CP949), so bytes that
//! are not valid UTF-8 are decoded as EUC-KR.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use encoding_rs::EUC_KR;
use sise_domain::model::{Listing, MAX_MILEAGE_KM};
pub use sise_domain::repository::{LoadReport, LoadedListings};
use sise_types::{Error, LoadError};

use crate::columns::{ColumnIndex, ColumnMapping};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceKind {
    Spreadsheet,
    Csv,
}

fn source_kind(path: &Path) -> Result<SourceKind, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(SourceKind::Spreadsheet),
        "csv" => Ok(SourceKind::Csv),
        _ => Err(LoadError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Load listings from `path`.
///
/// `sheet` selects the worksheet of a spreadsheet and is ignored for CSV.
pub fn load_listings(
    path: &Path,
    sheet: &str,
    columns: &ColumnMapping,
) -> Result<LoadedListings, Error> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }

    let rows = match source_kind(path)? {
        SourceKind::Spreadsheet => read_spreadsheet_rows(path, sheet)?,
        SourceKind::Csv => read_csv_rows(path)?,
    };

    let loaded = parse_rows(rows, columns)?;
    tracing::info!(
        path = %path.display(),
        listings = loaded.listings.len(),
        skipped = loaded.report.rows_skipped,
        "loaded listings"
    );
    Ok(loaded)
}

/// Header row followed by data rows, as cell text
fn parse_rows(
    rows: Vec<Vec<String>>,
    columns: &ColumnMapping,
) -> Result<LoadedListings, LoadError> {
    let mut rows = rows
        .into_iter()
        .enumerate()
        .filter(|(_, cells)| !is_blank(cells));

    let (_, headers) = rows.next().ok_or(LoadError::EmptySource)?;
    let index = columns.resolve(&headers)?;

    let mut listings = Vec::new();
    let mut report = LoadReport::default();
    for (row_idx, cells) in rows {
        let row_num = row_idx + 1;
        report.rows_read += 1;
        match parse_record(&cells, &index, columns) {
            Ok(listing) => listings.push(listing),
            Err(invalid) => {
                report.rows_skipped += 1;
                tracing::warn!(
                    row = row_num,
                    column = %invalid.column,
                    value = %invalid.value,
                    "skipping row with invalid number"
                );
            }
        }
    }

    Ok(LoadedListings { listings, report })
}

fn is_blank(cells: &[String]) -> bool {
    cells.iter().all(|c| c.trim().is_empty())
}

#[derive(Debug, PartialEq)]
struct InvalidCell {
    column: String,
    value: String,
}

fn parse_record(
    cells: &[String],
    index: &ColumnIndex,
    columns: &ColumnMapping,
) -> Result<Listing, InvalidCell> {
    let text = |i: usize| cells.get(i).map(|c| c.trim()).unwrap_or("");

    let model_year = parse_number(text(index.model_year))
        .map(|y| y.trunc() as i32)
        .ok_or_else(|| invalid(&columns.model_year, text(index.model_year)))?;

    let mileage_km = parse_number(text(index.mileage))
        .filter(|km| (0.0..=MAX_MILEAGE_KM as f64).contains(km))
        .map(|km| km.trunc() as u64)
        .ok_or_else(|| invalid(&columns.mileage, text(index.mileage)))?;

    let price = parse_number(text(index.price))
        .ok_or_else(|| invalid(&columns.price, text(index.price)))?;

    Ok(Listing {
        manufacturer: text(index.manufacturer).to_string(),
        model: text(index.model).to_string(),
        model_year,
        mileage_km,
        price,
    })
}

fn invalid(column: &str, value: &str) -> InvalidCell {
    InvalidCell {
        column: column.to_string(),
        value: value.to_string(),
    }
}

/// Parse a numeric cell, tolerating thousands separators and a trailing unit
/// such as `km`, `만원` or `년`.
fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    let cleaned = cleaned.trim_end_matches(|c: char| !c.is_ascii_digit() && c != '.');
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn read_spreadsheet_rows(path: &Path, sheet: &str) -> Result<Vec<Vec<String>>, LoadError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| LoadError::Spreadsheet(e.to_string()))?;

    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(LoadError::SheetNotFound(sheet.to_string()));
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| LoadError::Spreadsheet(e.to_string()))?;

    Ok(range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect())
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn read_csv_rows(path: &Path) -> Result<Vec<Vec<String>>, Error> {
    let bytes = std::fs::read(path)?;
    let text = decode_csv_bytes(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| LoadError::Csv(e.to_string()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// UTF-8 (BOM stripped) when valid, EUC-KR otherwise
fn decode_csv_bytes(bytes: &[u8]) -> String {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            let (decoded, _, had_errors) = EUC_KR.decode(bytes);
            if had_errors {
                tracing::warn!("some characters could not be decoded from EUC-KR");
            }
            decoded.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn header() -> Vec<String> {
        row(&["회사", "모델", "연식(수)", "키로수", "가격(숫자)"])
    }

    #[test]
    fn test_parse_number_variants() {
        assert_eq!(parse_number("1,234"), Some(1234.0));
        assert_eq!(parse_number(" 2019.0 "), Some(2019.0));
        assert_eq!(parse_number("35,000km"), Some(35000.0));
        assert_eq!(parse_number("1,650만원"), Some(1650.0));
        assert_eq!(parse_number("2019년"), Some(2019.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("문의"), None);
    }

    #[test]
    fn test_parse_rows_skips_invalid_and_blank() {
        let rows = vec![
            row(&["", "", "", "", ""]),
            header(),
            row(&["현대", "아반떼", "2020", "30,000", "1650"]),
            row(&["", "", "", "", ""]),
            row(&["현대", "아반떼", "2019", "-5", "1500"]),
            row(&["기아", "K5", "2021.0", "12000", "가격문의"]),
            row(&["", "무명", "2010", "210000", "300"]),
        ];
        let loaded = parse_rows(rows, &ColumnMapping::default()).unwrap();

        assert_eq!(
            loaded.report,
            LoadReport {
                rows_read: 4,
                rows_skipped: 2,
            }
        );
        assert_eq!(
            loaded.listings,
            vec![
                Listing {
                    manufacturer: "현대".into(),
                    model: "아반떼".into(),
                    model_year: 2020,
                    mileage_km: 30_000,
                    price: 1650.0,
                },
                Listing {
                    manufacturer: "".into(),
                    model: "무명".into(),
                    model_year: 2010,
                    mileage_km: 210_000,
                    price: 300.0,
                },
            ]
        );
    }

    #[test]
    fn test_parse_rows_skips_implausible_mileage() {
        let rows = vec![
            header(),
            row(&["현대", "아반떼", "2020", "99999999999999999999", "1650"]),
            row(&["현대", "아반떼", "2019", "10,000,001", "1500"]),
            row(&["현대", "아반떼", "2018", "10,000,000", "1200"]),
        ];
        let loaded = parse_rows(rows, &ColumnMapping::default()).unwrap();

        assert_eq!(loaded.report.rows_skipped, 2);
        assert_eq!(loaded.listings.len(), 1);
        assert_eq!(loaded.listings[0].mileage_km, MAX_MILEAGE_KM);
    }

    #[test]
    fn test_parse_rows_short_record_is_skipped() {
        let rows = vec![header(), row(&["현대", "아반떼", "2020"])];
        let loaded = parse_rows(rows, &ColumnMapping::default()).unwrap();
        assert!(loaded.listings.is_empty());
        assert_eq!(loaded.report.rows_skipped, 1);
    }

    #[test]
    fn test_parse_rows_empty_source() {
        let err = parse_rows(vec![row(&["", ""])], &ColumnMapping::default()).unwrap_err();
        assert!(matches!(err, LoadError::EmptySource));
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        let mut bytes = b"\xEF\xBB\xBF".to_vec();
        bytes.extend_from_slice("회사,모델".as_bytes());
        assert_eq!(decode_csv_bytes(&bytes), "회사,모델");
    }

    #[test]
    fn test_decode_euc_kr_fallback() {
        let (encoded, _, _) = EUC_KR.encode("회사,모델\n현대,아반떼\n");
        assert_eq!(decode_csv_bytes(&encoded), "회사,모델\n현대,아반떼\n");
    }

    #[test]
    fn test_source_kind() {
        assert_eq!(
            source_kind(Path::new("used_cars.XLSX")).unwrap(),
            SourceKind::Spreadsheet
        );
        assert_eq!(source_kind(Path::new("a.csv")).unwrap(), SourceKind::Csv);
        assert!(matches!(
            source_kind(Path::new("a.txt")),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }
}
