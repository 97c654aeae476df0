use serde::{Deserialize, Serialize};
use sise_types::ViewMode;

/// What the user asked to see: one manufacturer/model pair and a view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub manufacturer: String,
    pub model: String,
    pub view: ViewMode,
}

impl Selection {
    pub fn new(manufacturer: impl Into<String>, model: impl Into<String>, view: ViewMode) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            view,
        }
    }
}
