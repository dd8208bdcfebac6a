//! # Catalog Filter
//!
//! Pure functions deriving the visible subset of a catalog. Neither the
//! catalog nor the favorites are touched.

use super::fold::{contains_folded, fold_chars};
use crate::models::CatalogRecord;
use std::collections::HashSet;

/// Distinct brands in first-seen order
pub fn unique_brands(catalog: &[CatalogRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .filter(|record| seen.insert(record.brand.as_str()))
        .map(|record| record.brand.clone())
        .collect()
}

/// Records matching both the brand and the keyword, in catalog order
///
/// `selected_brand` compares exactly. `search_keyword` is a case-insensitive
/// literal substring of the record name, folded the same way highlighting
/// folds it; an empty keyword matches everything.
pub fn filter_catalog(
    catalog: &[CatalogRecord],
    selected_brand: Option<&str>,
    search_keyword: &str,
) -> Vec<CatalogRecord> {
    let needle = fold_chars(search_keyword);
    catalog
        .iter()
        .filter(|record| matches_brand(record, selected_brand) && matches_keyword(record, &needle))
        .cloned()
        .collect()
}

fn matches_brand(record: &CatalogRecord, selected_brand: Option<&str>) -> bool {
    selected_brand.map_or(true, |brand| record.brand == brand)
}

/// `needle` must already be folded
fn matches_keyword(record: &CatalogRecord, needle: &[char]) -> bool {
    contains_folded(&record.name, needle)
}
