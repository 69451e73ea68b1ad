//! Favorites list and its persistence.
//!
//! Favorites are an ordered set of wallpaper ids: insertion order is kept for
//! display, and an id appears at most once. They are stored under
//! [`FAVORITES_KEY`] as a JSON array of strings. Anything else found under
//! that key is treated as "no favorites" rather than an error.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use serde_json::Value;

/// Namespaced key the favorites list is stored under.
pub const FAVORITES_KEY: &str = "aurawalls:favorites";

/// Ordered, duplicate-free set of favorite wallpaper ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: Vec<String>,
}

impl Favorites {
    /// Builds a favorites set, dropping repeated ids.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut favorites = Self::default();
        for id in ids {
            let id = id.into();
            if !favorites.contains(&id) {
                favorites.ids.push(id);
            }
        }
        favorites
    }

    /// Reads favorites from `store`.
    ///
    /// An absent key, a value that is not an array of strings, or a failing
    /// store all yield an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurawalls::storage::{Favorites, MemoryStore, FAVORITES_KEY};
    /// use serde_json::json;
    ///
    /// let store = MemoryStore::with_entry(FAVORITES_KEY, json!({"oops": true}));
    /// assert!(Favorites::load(&store).is_empty());
    /// ```
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let _span = tracing::debug_span!("favorites_load").entered();

        let value = match store.get(FAVORITES_KEY) {
            Ok(Some(value)) => value,
            Ok(None) => {
                tracing::debug!("no stored favorites, starting empty");
                return Self::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "cannot read favorites, starting empty");
                return Self::default();
            }
        };

        match serde_json::from_value::<Vec<String>>(value) {
            Ok(ids) => {
                let favorites = Self::from_ids(ids);
                tracing::debug!(count = favorites.len(), "favorites loaded");
                favorites
            }
            Err(e) => {
                tracing::warn!(error = %e, "stored favorites are malformed, starting empty");
                Self::default()
            }
        }
    }

    /// Writes the current ids to `store`.
    ///
    /// # Errors
    ///
    /// Propagates the store's write error.
    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let value = Value::from(self.ids.clone());
        store.set(FAVORITES_KEY, value)
    }

    /// Adds `id` if absent, removes it otherwise.
    ///
    /// Returns `true` if `id` is a favorite after the call. Toggling the same
    /// id twice restores the original membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|f| f == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|f| f == id)
    }

    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use serde_json::json;

    #[test]
    fn toggle_sequence() {
        let mut favorites = Favorites::default();
        assert!(favorites.toggle("a"));
        assert_eq!(favorites.ids(), ["a"]);
        assert!(favorites.toggle("b"));
        assert_eq!(favorites.ids(), ["a", "b"]);
        assert!(!favorites.toggle("a"));
        assert_eq!(favorites.ids(), ["b"]);
    }

    #[test]
    fn double_toggle_is_identity() {
        let mut favorites = Favorites::from_ids(["x", "y"]);
        let before = favorites.clone();
        favorites.toggle("y");
        favorites.toggle("y");
        assert_eq!(favorites.ids(), ["x", "y"]);
        favorites.toggle("z");
        favorites.toggle("z");
        assert_eq!(favorites, before);
    }

    #[test]
    fn absent_key_loads_empty() {
        assert!(Favorites::load(&MemoryStore::default()).is_empty());
    }

    #[test]
    fn malformed_values_load_empty() {
        for bad in [json!("a"), json!(42), json!([1, 2]), json!(null)] {
            let store = MemoryStore::with_entry(FAVORITES_KEY, bad);
            assert!(Favorites::load(&store).is_empty());
        }
    }

    #[test]
    fn repeated_ids_collapse_on_load() {
        let store = MemoryStore::with_entry(FAVORITES_KEY, json!(["a", "b", "a"]));
        assert_eq!(Favorites::load(&store).ids(), ["a", "b"]);
    }

    #[test]
    fn save_then_load_preserves_order() {
        let mut store = MemoryStore::default();
        Favorites::from_ids(["c", "a"]).save(&mut store).unwrap();
        assert_eq!(store.get(FAVORITES_KEY).unwrap(), Some(json!(["c", "a"])));
        assert_eq!(Favorites::load(&store).ids(), ["c", "a"]);
    }
}
