//! # Easel Core
//!
//! Shared logic of the Easel art-supply catalog browser: the favorites store
//! and the catalog filter/search/highlight engine both screens depend on.
//!
//! ## Architecture
//!
//! - `models` - Catalog record and display helpers
//! - `state/` - Favorites store (observable) and filter state
//! - `search/` - Brand list, filtering and title highlighting
//! - `loader` - Catalog endpoint client
//! - `screens/` - Headless home and favorites screen state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use easel_core::loader::{HttpCatalogLoader, LoaderConfig};
//! use easel_core::screens::{FavoritesScreen, HomeScreen};
//! use easel_core::state::FavoritesStore;
//!
//! let favorites = FavoritesStore::new();
//! let loader = HttpCatalogLoader::new(LoaderConfig::from_env()?)?;
//!
//! let mut home = HomeScreen::new(favorites.clone());
//! home.load(&loader).await;
//! home.set_search_keyword("brush");
//! let cards = home.cards();
//!
//! let tab = FavoritesScreen::new(favorites.clone());
//! let _subscription = favorites.on_change(|event| println!("{:?}", event.change));
//! ```

pub mod loader;
pub mod models;
pub mod screens;
pub mod search;
pub mod state;

pub use models::CatalogRecord;
pub use search::{filter_catalog, highlight_matches, unique_brands, HighlightSegment};
pub use state::{FavoritesStore, FilterState, Subscription};
