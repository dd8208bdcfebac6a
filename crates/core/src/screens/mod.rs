//! # Screens
//!
//! Headless state for the two tabs. Layout, navigation and styling stay with
//! the presentation layer; these types hold what the screens render and take
//! the user's intents.

pub mod card;
pub mod favorites;
pub mod home;

pub use card::CatalogCard;
pub use favorites::{ClearConfirmation, FavoritesScreen, EMPTY_MESSAGE};
pub use home::{HomeScreen, LoadStatus};
