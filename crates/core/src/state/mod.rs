pub mod favorites;
pub mod filter_state;

pub use favorites::{FavoritesChange, FavoritesEvent, FavoritesStore, Subscription};
pub use filter_state::FilterState;
