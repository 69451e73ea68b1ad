//! In-memory catalog with its load lifecycle.
//!
//! [`Catalog`] is filled once per session from a
//! [`CatalogSource`](super::CatalogSource) and is read-only afterwards. Until a
//! load completes it reports [`LoadState::Loading`]; a failed load leaves it
//! [`LoadState::Unavailable`] until the user asks for a retry.

use crate::domain::error::{AuraError, Result};
use crate::domain::WallpaperRecord;
use std::collections::HashSet;

/// Where the catalog is in its load lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// A load is in flight (or has not started yet).
    Loading,
    /// The catalog is populated.
    Ready(Vec<WallpaperRecord>),
    /// The last load failed; holds a human-readable reason.
    Unavailable(String),
}

/// Owns the wallpaper records for the session.
#[derive(Debug, Clone)]
pub struct Catalog {
    state: LoadState,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Creates an empty catalog in the [`LoadState::Loading`] state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LoadState::Loading,
        }
    }

    /// Creates a ready catalog from already-available records.
    ///
    /// Duplicate ids are dropped the same way [`Catalog::finish_load`] drops them.
    #[must_use]
    pub fn from_records(records: Vec<WallpaperRecord>) -> Self {
        let mut catalog = Self::new();
        catalog.finish_load(Ok(records));
        catalog
    }

    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Reason of the last failed load, if the catalog is unavailable.
    #[must_use]
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.state {
            LoadState::Unavailable(reason) => Some(reason),
            _ => None,
        }
    }

    /// Records in catalog order. Empty unless the catalog is ready.
    #[must_use]
    pub fn records(&self) -> &[WallpaperRecord] {
        match &self.state {
            LoadState::Ready(records) => records,
            _ => &[],
        }
    }

    /// Applies the outcome of a load.
    ///
    /// On success the records replace any previous content, keeping the first
    /// record for each id. On failure the catalog becomes unavailable; only
    /// [`AuraError::DataUnavailable`] is expected here, other errors are
    /// reported the same way.
    pub fn finish_load(&mut self, result: Result<Vec<WallpaperRecord>>) {
        let _span = tracing::debug_span!("catalog_finish_load", ok = result.is_ok()).entered();

        match result {
            Ok(records) => {
                let total = records.len();
                let records = dedupe_by_id(records);
                if records.len() != total {
                    tracing::warn!(
                        dropped = total - records.len(),
                        "duplicate wallpaper ids dropped from catalog"
                    );
                }
                tracing::debug!(count = records.len(), "catalog ready");
                self.state = LoadState::Ready(records);
            }
            Err(e) => {
                tracing::warn!(error = %e, "catalog load failed");
                let reason = match e {
                    AuraError::DataUnavailable(reason) => reason,
                    other => other.to_string(),
                };
                self.state = LoadState::Unavailable(reason);
            }
        }
    }

    /// Marks a manual retry as in flight.
    ///
    /// A ready catalog keeps serving its records; only an unavailable one goes
    /// back to loading. Returns `true` if a load should be started.
    pub fn begin_reload(&mut self) -> bool {
        match self.state {
            LoadState::Unavailable(_) => {
                self.state = LoadState::Loading;
                true
            }
            LoadState::Loading | LoadState::Ready(_) => false,
        }
    }

    /// Looks up a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AuraError::RecordNotFound`] if the id is not in the catalog.
    pub fn get(&self, id: &str) -> Result<&WallpaperRecord> {
        self.records()
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| AuraError::RecordNotFound(id.to_string()))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_ok()
    }

    /// Resolves ids to records in the order given, skipping unknown ids.
    #[must_use]
    pub fn resolve<'a, I, S>(&'a self, ids: I) -> Vec<&'a WallpaperRecord>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .filter_map(|id| match self.get(id.as_ref()) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unresolved id");
                    None
                }
            })
            .collect()
    }
}

fn dedupe_by_id(records: Vec<WallpaperRecord>) -> Vec<WallpaperRecord> {
    let mut seen = HashSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|w| seen.insert(w.id.clone()))
        .collect()
}
