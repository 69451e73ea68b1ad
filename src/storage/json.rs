//! JSON file-backed key-value store.
//!
//! All entries live in one human-readable JSON document. Writes go to a
//! temporary file that is then renamed over the original, so a crash mid-write
//! never leaves a half-written store behind.
//!
//! # Performance Characteristics
//!
//! - **Read**: served from memory, the file is read once on open
//! - **Write**: O(n), the whole document is rewritten on each `set`
//! - **Best for**: a few small values written on user actions

use crate::domain::error::{AuraError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk document format.
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "aurawalls:favorites": ["cosmic-3", "amoled-12"]
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the document format for future migrations.
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, Value>,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// Key-value store persisted as a single JSON file.
///
/// # Thread Safety
///
/// `Send` but not `Sync`; owned by the single controller that mutates
/// favorites.
#[derive(Debug)]
pub struct JsonFileStore {
    file_path: PathBuf,
    data: StoreData,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file yields an empty store. A file that exists but does not
    /// parse is also treated as empty (with a warning); the next `set`
    /// overwrites it.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but cannot be read.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use aurawalls::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::open(PathBuf::from("/tmp/aurawalls/store.json"))?;
    /// # Ok::<(), aurawalls::AuraError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening key-value store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no store file yet, starting empty");
            StoreData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store opened");

        Ok(Self { file_path, data })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        match serde_json::from_str::<StoreData>(&contents) {
            Ok(data) => {
                tracing::debug!(version = data.version, entries = data.entries.len(), "loaded store data");
                Ok(data)
            }
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "store file is corrupt, starting empty");
                Ok(StoreData::default())
            }
        }
    }

    /// Writes the document to a sibling temp file, then renames it into place.
    fn save_to_file(&self) -> Result<()> {
        tracing::debug!(path = ?self.file_path, "saving store data");

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| AuraError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!("store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let _span = tracing::debug_span!("json_store_set", key = %key).entered();

        self.data.entries.insert(key.to_string(), value);
        self.save_to_file()
    }
}
