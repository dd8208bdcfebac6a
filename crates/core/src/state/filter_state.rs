//! # Filter State
//!
//! The transient (brand, keyword) pair held by the home screen. Not persisted.

use crate::models::CatalogRecord;
use crate::search::filter_catalog;
use serde::{Deserialize, Serialize};

/// Active brand filter and search keyword
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Exact, case-sensitive brand to keep; `None` keeps every brand
    pub selected_brand: Option<String>,
    /// Case-insensitive name substring; empty keeps every name
    #[serde(default)]
    pub search_keyword: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brand chip tap: select `brand`, or clear the selection if it is
    /// already the selected one
    pub fn toggle_brand(&mut self, brand: &str) {
        if self.selected_brand.as_deref() == Some(brand) {
            self.selected_brand = None;
        } else {
            self.selected_brand = Some(brand.to_string());
        }
    }

    pub fn clear_brand(&mut self) {
        self.selected_brand = None;
    }

    pub fn set_search_keyword(&mut self, keyword: impl Into<String>) {
        self.search_keyword = keyword.into();
    }

    /// Whether `brand` is the active brand chip
    pub fn is_selected(&self, brand: &str) -> bool {
        self.selected_brand.as_deref() == Some(brand)
    }

    /// Visible subset of `catalog` under this state
    pub fn apply(&self, catalog: &[CatalogRecord]) -> Vec<CatalogRecord> {
        filter_catalog(
            catalog,
            self.selected_brand.as_deref(),
            &self.search_keyword,
        )
    }
}
