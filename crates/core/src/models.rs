//! # Catalog Models
//!
//! The catalog record as delivered by the catalog endpoint, plus the small
//! display helpers both screens share.
//!
//! ## Wire format
//! The endpoint returns a JSON array of objects keyed `id`, `artName`, `price`,
//! `description`, `glassSurface`, `image`, `brand` and `limitedTimeDeal`.
//! Serde renames map those keys onto the Rust field names below.

use serde::{Deserialize, Serialize};

/// One product entry in the catalog
///
/// Records are immutable once loaded. Nothing in this crate mutates a record
/// after deserialization; favorites hold their own snapshot copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Identity, unique within a catalog snapshot
    pub id: String,
    /// Display title
    #[serde(rename = "artName")]
    pub name: String,
    /// Non-negative list price
    pub price: f64,
    #[serde(default)]
    pub description: String,
    /// Image location
    #[serde(rename = "image", default)]
    pub image_uri: String,
    pub brand: String,
    /// Promotional discount in [0, 1]
    #[serde(rename = "limitedTimeDeal", default)]
    pub deal_fraction: f64,
    /// Descriptive attribute only
    #[serde(rename = "glassSurface", default)]
    pub has_glass_surface: bool,
}

impl CatalogRecord {
    /// Create a record with the identifying fields; the rest default to empty/zero
    pub fn new(id: impl Into<String>, name: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: 0.0,
            description: String::new(),
            image_uri: String::new(),
            brand: brand.into(),
            deal_fraction: 0.0,
            has_glass_surface: false,
        }
    }

    /// Set the list price
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Set the discount fraction
    pub fn with_deal(mut self, deal_fraction: f64) -> Self {
        self.deal_fraction = deal_fraction;
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image location
    pub fn with_image(mut self, image_uri: impl Into<String>) -> Self {
        self.image_uri = image_uri.into();
        self
    }

    /// Discount as a whole percentage (0.15 -> 15)
    ///
    /// Rounded so that binary floating point noise never reaches the label.
    pub fn deal_percent(&self) -> i64 {
        (self.deal_fraction * 100.0).round() as i64
    }

    /// Price as shown on a card, e.g. `$12` or `$12.5`
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }

    /// Deal line as shown on a card, e.g. `Deal: 15% off`
    pub fn deal_label(&self) -> String {
        format!("Deal: {}% off", self.deal_percent())
    }
}
