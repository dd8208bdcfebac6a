//! Render data for one catalog card, shared by both screens.

use crate::models::CatalogRecord;
use crate::search::{highlight_matches, HighlightSegment};
use serde::Serialize;

/// Everything the presentation layer needs to draw one grid cell
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogCard {
    pub id: String,
    /// Title split for keyword highlighting
    pub title: Vec<HighlightSegment>,
    pub price_label: String,
    pub deal_label: String,
    pub image_uri: String,
    /// Filled heart when true
    pub is_favorite: bool,
}

impl CatalogCard {
    pub fn new(record: &CatalogRecord, keyword: &str, is_favorite: bool) -> Self {
        Self {
            id: record.id.clone(),
            title: highlight_matches(&record.name, keyword),
            price_label: record.price_label(),
            deal_label: record.deal_label(),
            image_uri: record.image_uri.clone(),
            is_favorite,
        }
    }

    /// Title as plain text
    pub fn title_text(&self) -> String {
        self.title.iter().map(|segment| segment.text.as_str()).collect()
    }
}
