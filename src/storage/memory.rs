//! Process-local key-value store.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use serde_json::Value;
use std::collections::HashMap;

/// Keeps values in a `HashMap`; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Value>,
}

impl MemoryStore {
    /// Creates a store pre-seeded with one raw value.
    ///
    /// Handy for simulating whatever a previous run (or a corrupted file) left
    /// behind.
    #[must_use]
    pub fn with_entry(key: impl Into<String>, value: Value) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value);
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
