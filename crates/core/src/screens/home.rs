//! # Home Screen State
//!
//! Catalog grid with a search bar and brand chips. The catalog is fetched on
//! every mount and lives only as long as the screen.

use super::card::CatalogCard;
use crate::loader::CatalogLoader;
use crate::models::CatalogRecord;
use crate::search::unique_brands;
use crate::state::{FavoritesStore, FilterState};
use serde::Serialize;

/// Progress of the catalog fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Loading,
    Ready,
    /// Fetch failed; the message is shown with a retry affordance
    Failed(String),
}

/// Headless state of the home screen
pub struct HomeScreen {
    favorites: FavoritesStore,
    records: Vec<CatalogRecord>,
    status: LoadStatus,
    filter: FilterState,
}

impl HomeScreen {
    pub fn new(favorites: FavoritesStore) -> Self {
        Self {
            favorites,
            records: Vec::new(),
            status: LoadStatus::Loading,
            filter: FilterState::new(),
        }
    }

    /// Fetch the catalog. On failure previously loaded records are kept and
    /// the favorites are untouched.
    pub async fn load(&mut self, loader: &dyn CatalogLoader) -> &LoadStatus {
        self.status = LoadStatus::Loading;

        match loader.fetch().await {
            Ok(records) => {
                tracing::info!(count = records.len(), "Catalog loaded");
                self.records = records;
                self.status = LoadStatus::Ready;
            }
            Err(e) => {
                tracing::warn!("Failed to load catalog: {}", e);
                self.status = LoadStatus::Failed(e.to_string());
            }
        }

        &self.status
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Detail navigation lookup
    pub fn record(&self, id: &str) -> Option<&CatalogRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Brand chips, first-seen order
    pub fn brands(&self) -> Vec<String> {
        unique_brands(&self.records)
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        self.filter.toggle_brand(brand);
    }

    pub fn set_search_keyword(&mut self, keyword: impl Into<String>) {
        self.filter.set_search_keyword(keyword);
    }

    /// Records passing the current filter
    pub fn visible(&self) -> Vec<CatalogRecord> {
        self.filter.apply(&self.records)
    }

    /// Cards for the visible records, titles highlighted by the live keyword
    pub fn cards(&self) -> Vec<CatalogCard> {
        self.visible()
            .iter()
            .map(|record| {
                CatalogCard::new(
                    record,
                    &self.filter.search_keyword,
                    self.favorites.is_favorite(&record.id),
                )
            })
            .collect()
    }

    /// Heart tap: favorite or unfavorite the record. Returns the new
    /// membership, or `None` if the id is not in the loaded catalog.
    pub fn toggle_favorite(&self, id: &str) -> Option<bool> {
        self.record(id)
            .map(|record| self.favorites.toggle_favorite(record))
    }
}
