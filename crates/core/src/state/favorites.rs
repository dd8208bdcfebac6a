//! # Favorites Store
//!
//! The single source of truth for "is record X favorited", shared by every
//! screen through a cloneable handle.
//!
//! Entries are snapshots: a favorite keeps the record as it was when added,
//! independent of later catalog fetches. Every mutating call notifies all
//! observers synchronously before it returns.

use crate::models::CatalogRecord;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak,
};

/// What a mutating call did to the favorites set
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FavoritesChange {
    /// `add_favorite` was called for this id
    Added { id: String },
    /// `remove_favorite` was called for this id
    Removed { id: String },
    /// `clear_favorites` removed `count` entries
    Cleared { count: usize },
}

/// Notification delivered to observers after every mutating call
#[derive(Debug, Clone, Serialize)]
pub struct FavoritesEvent {
    pub change: FavoritesChange,
    /// False when the call was a no-op (duplicate add, unknown id, empty clear)
    pub changed: bool,
    /// Number of favorites after the call
    pub len: usize,
    pub timestamp: DateTime<Utc>,
}

impl FavoritesEvent {
    fn new(change: FavoritesChange, changed: bool, len: usize) -> Self {
        Self {
            change,
            changed,
            len,
            timestamp: Utc::now(),
        }
    }
}

type Callback = Arc<dyn Fn(&FavoritesEvent) + Send + Sync>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    callbacks: Vec<(u64, Callback)>,
}

#[derive(Default)]
struct Inner {
    entries: RwLock<IndexMap<String, CatalogRecord>>,
    observers: Mutex<Observers>,
}

impl Inner {
    fn observers(&self) -> MutexGuard<'_, Observers> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle returned by [`FavoritesStore::on_change`]
///
/// Dropping the handle keeps the callback registered; call
/// [`Subscription::unsubscribe`] to detach it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    inner: Weak<Inner>,
}

impl Subscription {
    /// Detach the callback. Returns false if it was already gone.
    pub fn unsubscribe(self) -> bool {
        let Some(inner) = self.inner.upgrade() else {
            return false;
        };
        let mut observers = inner.observers();
        let before = observers.callbacks.len();
        observers.callbacks.retain(|(id, _)| *id != self.id);
        observers.callbacks.len() != before
    }
}

/// Process-wide favorites, passed by handle to every consumer
///
/// Cloning is cheap and every clone shares the same set. Create one at
/// application start; tests create a fresh one each.
#[derive(Clone, Default)]
pub struct FavoritesStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("len", &self.len())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl FavoritesStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, CatalogRecord>> {
        self.inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, CatalogRecord>> {
        self.inner
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Favorite a record. A record whose id is already present is left as
    /// stored; returns whether the set changed.
    pub fn add_favorite(&self, record: CatalogRecord) -> bool {
        let id = record.id.clone();
        let (changed, len) = {
            let mut entries = self.write();
            let changed = !entries.contains_key(&id);
            if changed {
                entries.insert(id.clone(), record);
            }
            (changed, entries.len())
        };

        tracing::debug!(id = %id, changed, len, "Favorite added");
        self.notify(FavoritesEvent::new(FavoritesChange::Added { id }, changed, len));
        changed
    }

    /// Unfavorite by id. Unknown ids are a no-op; returns whether the set changed.
    pub fn remove_favorite(&self, id: &str) -> bool {
        let (changed, len) = {
            let mut entries = self.write();
            let changed = entries.shift_remove(id).is_some();
            (changed, entries.len())
        };

        tracing::debug!(id = %id, changed, len, "Favorite removed");
        self.notify(FavoritesEvent::new(
            FavoritesChange::Removed { id: id.to_string() },
            changed,
            len,
        ));
        changed
    }

    /// Flip membership for `record`; returns the new membership
    pub fn toggle_favorite(&self, record: &CatalogRecord) -> bool {
        if self.is_favorite(&record.id) {
            self.remove_favorite(&record.id);
            false
        } else {
            self.add_favorite(record.clone());
            true
        }
    }

    /// Remove every favorite, irreversibly. Callers are expected to have
    /// confirmed with the user first. Returns how many entries were removed.
    pub fn clear_favorites(&self) -> usize {
        let count = {
            let mut entries = self.write();
            let count = entries.len();
            entries.clear();
            count
        };

        tracing::debug!(count, "Favorites cleared");
        self.notify(FavoritesEvent::new(
            FavoritesChange::Cleared { count },
            count > 0,
            0,
        ));
        count
    }

    /// Membership query
    pub fn is_favorite(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// The stored snapshot for `id`
    pub fn get(&self, id: &str) -> Option<CatalogRecord> {
        self.read().get(id).cloned()
    }

    /// Current favorites in insertion order
    ///
    /// Returns owned copies; call again for a fresh view after a mutation.
    pub fn list_favorites(&self) -> Vec<CatalogRecord> {
        self.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Register a callback run after every mutating call
    ///
    /// Callbacks run on the mutating thread with no store lock held, so they
    /// may read or mutate the store themselves.
    pub fn on_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&FavoritesEvent) + Send + Sync + 'static,
    {
        let mut observers = self.inner.observers();
        observers.next_id += 1;
        let id = observers.next_id;
        observers.callbacks.push((id, Arc::new(callback)));

        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Number of registered callbacks
    pub fn subscriber_count(&self) -> usize {
        self.inner.observers().callbacks.len()
    }

    fn notify(&self, event: FavoritesEvent) {
        // Snapshot the list so callbacks can (un)subscribe while being notified
        let callbacks: Vec<Callback> = self
            .inner
            .observers()
            .callbacks
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();

        for callback in callbacks {
            callback(&event);
        }
    }
}
