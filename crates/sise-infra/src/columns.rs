//! Source column names and header resolution

use serde::{Deserialize, Serialize};
use sise_types::LoadError;

/// Header names of the five required source columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(default = "default_manufacturer")]
    pub manufacturer: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_model_year")]
    pub model_year: String,
    #[serde(default = "default_mileage")]
    pub mileage: String,
    #[serde(default = "default_price")]
    pub price: String,
}

fn default_manufacturer() -> String {
    "회사".to_string()
}

fn default_model() -> String {
    "모델".to_string()
}

fn default_model_year() -> String {
    "연식(수)".to_string()
}

fn default_mileage() -> String {
    "키로수".to_string()
}

fn default_price() -> String {
    "가격(숫자)".to_string()
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            manufacturer: default_manufacturer(),
            model: default_model(),
            model_year: default_model_year(),
            mileage: default_mileage(),
            price: default_price(),
        }
    }
}

impl ColumnMapping {
    pub fn required(&self) -> [&str; 5] {
        [
            self.manufacturer.as_str(),
            self.model.as_str(),
            self.model_year.as_str(),
            self.mileage.as_str(),
            self.price.as_str(),
        ]
    }

    /// Find each required column in `headers`.
    ///
    /// Every missing column is reported at once, together with the full list of
    /// required names.
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S]) -> Result<ColumnIndex, LoadError> {
        let position = |name: &str| {
            headers
                .iter()
                .position(|h| normalize_header(h.as_ref()) == name)
        };

        let required = self.required();
        let found: Vec<Option<usize>> = required.iter().map(|&name| position(name)).collect();
        let missing: Vec<String> = required
            .iter()
            .zip(&found)
            .filter(|(_, idx)| idx.is_none())
            .map(|(name, _)| name.to_string())
            .collect();

        match found.as_slice() {
            [Some(manufacturer), Some(model), Some(model_year), Some(mileage), Some(price)] => {
                Ok(ColumnIndex {
                    manufacturer: *manufacturer,
                    model: *model,
                    model_year: *model_year,
                    mileage: *mileage,
                    price: *price,
                })
            }
            _ => Err(LoadError::MissingColumns {
                required: required.iter().map(|s| s.to_string()).collect(),
                missing,
            }),
        }
    }
}

fn normalize_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

/// Positions of the required columns within a header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    pub manufacturer: usize,
    pub model: usize,
    pub model_year: usize,
    pub mileage: usize,
    pub price: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_headers_any_order() {
        let headers = ["가격(숫자)", "비고", "회사", "모델", "키로수", "연식(수)"];
        let index = ColumnMapping::default().resolve(&headers).unwrap();
        assert_eq!(
            index,
            ColumnIndex {
                manufacturer: 2,
                model: 3,
                model_year: 5,
                mileage: 4,
                price: 0,
            }
        );
    }

    #[test]
    fn test_resolve_strips_bom_and_whitespace() {
        let headers = ["\u{feff}회사", " 모델 ", "연식(수)", "키로수", "가격(숫자)"];
        assert!(ColumnMapping::default().resolve(&headers).is_ok());
    }

    #[test]
    fn test_resolve_reports_all_missing() {
        let headers = ["회사", "모델", "가격"];
        let err = ColumnMapping::default().resolve(&headers).unwrap_err();
        match err {
            LoadError::MissingColumns { required, missing } => {
                assert_eq!(required.len(), 5);
                assert_eq!(missing, vec!["연식(수)", "키로수", "가격(숫자)"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_partial_mapping_deserializes_with_defaults() {
        let mapping: ColumnMapping = serde_json::from_str(r#"{"price": "가격"}"#).unwrap();
        assert_eq!(mapping.price, "가격");
        assert_eq!(mapping.manufacturer, "회사");
    }
}
