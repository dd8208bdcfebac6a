//! # Search
//!
//! The filter engine shared by the home and favorites screens.
//!
//! - `filter` - Brand list and brand/keyword filtering
//! - `highlight` - Keyword segmentation for rendered titles

mod fold;
pub mod filter;
pub mod highlight;

pub use filter::{filter_catalog, unique_brands};
pub use highlight::{highlight_matches, HighlightSegment};
