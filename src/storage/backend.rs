//! Key-value store abstraction.
//!
//! The browsing core only needs to remember a handful of small values across
//! restarts (today, just the favorites list). [`KeyValueStore`] is the minimal
//! surface for that: read a value by key, write a value by key. Values are
//! JSON so callers decide their own shape and can detect malformed data.

use crate::domain::error::Result;
use serde_json::Value;

/// Persistent string-keyed store of JSON values.
///
/// # Implementations
///
/// - [`JsonFileStore`](super::JsonFileStore): single JSON document on disk
/// - [`MemoryStore`](super::MemoryStore): process-local, for tests
///
/// # Examples
///
/// ```
/// use aurawalls::storage::{KeyValueStore, MemoryStore};
/// use serde_json::json;
///
/// let mut store = MemoryStore::default();
/// assert!(store.get("missing")?.is_none());
///
/// store.set("greeting", json!(["hi"]))?;
/// assert_eq!(store.get("greeting")?, Some(json!(["hi"])));
/// # Ok::<(), aurawalls::AuraError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}
