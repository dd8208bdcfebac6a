//! # Favorites Screen State
//!
//! Grid of favorited records with swipe-to-delete and a confirmed clear-all.
//!
//! Titles here are rendered with an empty keyword: the favorites tab has no
//! search bar, so nothing is highlighted.

use super::card::CatalogCard;
use crate::state::FavoritesStore;

/// Shown when there are no favorites
pub const EMPTY_MESSAGE: &str = "No favorite items found.";

/// Headless state of the favorites screen
pub struct FavoritesScreen {
    favorites: FavoritesStore,
}

impl FavoritesScreen {
    pub fn new(favorites: FavoritesStore) -> Self {
        Self { favorites }
    }

    /// Cards in the order the records were favorited
    pub fn cards(&self) -> Vec<CatalogCard> {
        self.favorites
            .list_favorites()
            .iter()
            .map(|record| CatalogCard::new(record, "", self.favorites.is_favorite(&record.id)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    /// Whether the "Clear All" button is shown
    pub fn shows_clear_all(&self) -> bool {
        !self.is_empty()
    }

    /// Swipe action
    pub fn delete(&self, id: &str) -> bool {
        self.favorites.remove_favorite(id)
    }

    /// Heart tap on this screen only ever unfavorites
    pub fn heart_pressed(&self, id: &str) -> bool {
        self.favorites.is_favorite(id) && self.favorites.remove_favorite(id)
    }

    /// Start the clear-all flow. `None` when there is nothing to clear.
    ///
    /// Nothing is removed until [`ClearConfirmation::confirm`] is called;
    /// dropping the confirmation cancels.
    pub fn request_clear(&self) -> Option<ClearConfirmation<'_>> {
        let pending = self.favorites.len();
        (pending > 0).then(|| ClearConfirmation {
            favorites: &self.favorites,
            pending,
        })
    }
}

/// Pending, user-facing confirmation for the destructive clear-all
#[must_use = "dropping the confirmation cancels the clear"]
pub struct ClearConfirmation<'a> {
    favorites: &'a FavoritesStore,
    pending: usize,
}

impl ClearConfirmation<'_> {
    pub const TITLE: &'static str = "Clear All Favorites";
    pub const MESSAGE: &'static str = "Are you sure you want to remove all favorite items?";

    /// Favorites present when the flow started
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// User chose "Yes". Returns how many favorites were removed.
    pub fn confirm(self) -> usize {
        self.favorites.clear_favorites()
    }

    /// User chose "Cancel"
    pub fn cancel(self) {}
}
