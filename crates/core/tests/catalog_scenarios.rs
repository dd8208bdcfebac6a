//! End-to-end checks through the public API: one store shared by both tabs.

use easel_core::loader::StaticCatalogLoader;
use easel_core::screens::{FavoritesScreen, HomeScreen, LoadStatus};
use easel_core::state::FavoritesChange;
use easel_core::{filter_catalog, highlight_matches, CatalogRecord, FavoritesStore};
use std::sync::{Arc, Mutex};

fn catalog() -> Vec<CatalogRecord> {
    vec![
        CatalogRecord::new("1", "Red Brush", "Acme"),
        CatalogRecord::new("2", "Blue Brush", "Zeta"),
    ]
}

#[test]
fn test_brand_and_keyword_scenario() {
    let result = filter_catalog(&catalog(), Some("Acme"), "brush");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "1");
}

#[test]
fn test_clear_scenario() {
    let store = FavoritesStore::new();
    store.add_favorite(catalog()[1].clone());
    store.clear_favorites();

    assert!(store.list_favorites().is_empty());
    assert!(!store.is_favorite("2"));
}

#[test]
fn test_highlight_scenarios() {
    let segments = highlight_matches("RedPaint", "red");
    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].text.as_str(), segments[0].is_match), ("Red", true));
    assert_eq!((segments[1].text.as_str(), segments[1].is_match), ("Paint", false));

    let segments = highlight_matches("Brush", "");
    assert_eq!(segments.len(), 1);
    assert_eq!((segments[0].text.as_str(), segments[0].is_match), ("Brush", false));
}

#[tokio::test]
async fn test_both_tabs_share_one_store() {
    let favorites = FavoritesStore::new();
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&changes);
    let subscription = favorites.on_change(move |event| {
        sink.lock().unwrap().push(event.change.clone());
    });

    let mut home = HomeScreen::new(favorites.clone());
    let tab = FavoritesScreen::new(favorites.clone());

    home.load(&StaticCatalogLoader::new(catalog())).await;
    assert_eq!(home.status(), &LoadStatus::Ready);

    home.toggle_favorite("2");
    home.toggle_favorite("1");
    let ids: Vec<String> = tab.cards().into_iter().map(|card| card.id).collect();
    assert_eq!(ids, vec!["2", "1"]);

    assert!(tab.delete("2"));
    let home_cards = home.cards();
    assert!(home_cards[0].is_favorite);
    assert!(!home_cards[1].is_favorite);

    // A refetch that drops a record does not drop its favorite
    home.load(&StaticCatalogLoader::new(vec![catalog()[1].clone()])).await;
    assert!(favorites.is_favorite("1"));

    let removed = tab.request_clear().map(|confirmation| confirmation.confirm());
    assert_eq!(removed, Some(1));
    assert!(tab.is_empty());

    assert_eq!(
        *changes.lock().unwrap(),
        vec![
            FavoritesChange::Added { id: "2".into() },
            FavoritesChange::Added { id: "1".into() },
            FavoritesChange::Removed { id: "2".into() },
            FavoritesChange::Cleared { count: 1 },
        ]
    );
    assert!(subscription.unsubscribe());
}
