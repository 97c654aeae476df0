use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub manufacturer: String, // 회사
    pub model: String,        // 모델
    pub model_year: i32,      // 연식(수)
    pub mileage_km: u64,      // 키로수
    pub price: f64,           // 가격(숫자), 만원
}

impl Listing {
    /// Rows without a manufacturer or model never reach the selection lists
    pub fn is_selectable(&self) -> bool {
        !self.manufacturer.is_empty() && !self.model.is_empty()
    }

    pub fn matches(&self, manufacturer: &str, model: &str) -> bool {
        self.manufacturer == manufacturer && self.model == model
    }
}
