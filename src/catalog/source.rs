//! Catalog data sources.
//!
//! The core does not care where records come from. A [`CatalogSource`] yields
//! the complete record list once per load; it may suspend, and it fails with
//! [`AuraError::DataUnavailable`] when the data cannot be obtained. Sources
//! never retry on their own.

use crate::domain::error::{AuraError, Result};
use crate::domain::WallpaperRecord;
use futures_util::future::BoxFuture;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Instrument;

/// Asynchronous provider of the full catalog.
///
/// Repeated calls within a session return the same logical content.
///
/// # Examples
///
/// ```
/// use aurawalls::catalog::{CatalogSource, StaticSource};
/// use aurawalls::{Category, Mood, WallpaperRecord};
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let source = StaticSource::new(vec![
///     WallpaperRecord::new("a", "Silent Cosmic 1", Category::Cosmic, Mood::Calm),
/// ]);
/// let records = source.load().await?;
/// assert_eq!(records.len(), 1);
/// # Ok::<(), aurawalls::AuraError>(())
/// # }).unwrap();
/// ```
pub trait CatalogSource: Send + Sync {
    /// Loads every record.
    ///
    /// # Errors
    ///
    /// Returns [`AuraError::DataUnavailable`] if the source cannot be reached
    /// or its content cannot be decoded.
    fn load(&self) -> BoxFuture<'_, Result<Vec<WallpaperRecord>>>;
}

/// Serves a fixed, in-memory record list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<WallpaperRecord>,
}

impl StaticSource {
    #[must_use]
    pub const fn new(records: Vec<WallpaperRecord>) -> Self {
        Self { records }
    }
}

impl CatalogSource for StaticSource {
    fn load(&self) -> BoxFuture<'_, Result<Vec<WallpaperRecord>>> {
        let records = self.records.clone();
        Box::pin(std::future::ready(Ok(records)))
    }
}

/// Reads the catalog from a JSON file holding an array of records.
///
/// A missing, unreadable or malformed file is reported as
/// [`AuraError::DataUnavailable`].
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn load(&self) -> BoxFuture<'_, Result<Vec<WallpaperRecord>>> {
        Box::pin(async move {
            tracing::debug!(path = ?self.path, "reading catalog file");

            let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
                AuraError::DataUnavailable(format!("cannot read {}: {e}", self.path.display()))
            })?;

            let records: Vec<WallpaperRecord> = serde_json::from_str(&contents).map_err(|e| {
                AuraError::DataUnavailable(format!("cannot parse {}: {e}", self.path.display()))
            })?;

            tracing::debug!(count = records.len(), "catalog file decoded");
            Ok(records)
        })
    }
}

/// Loads from `source`, giving up after `timeout`.
///
/// Every failure, including expiry of the timeout, is reported as
/// [`AuraError::DataUnavailable`]. Nothing is retried.
///
/// # Errors
///
/// Returns [`AuraError::DataUnavailable`] if the source fails or does not
/// finish in time.
pub async fn load_with_timeout(
    source: &dyn CatalogSource,
    timeout: Duration,
) -> Result<Vec<WallpaperRecord>> {
    let span = tracing::debug_span!("catalog_load", timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));

    async move {
        match tokio::time::timeout(timeout, source.load()).await {
            Ok(Ok(records)) => Ok(records),
            Ok(Err(AuraError::DataUnavailable(reason))) => Err(AuraError::DataUnavailable(reason)),
            Ok(Err(e)) => Err(AuraError::DataUnavailable(e.to_string())),
            Err(_) => {
                tracing::warn!("catalog load timed out");
                Err(AuraError::DataUnavailable(format!(
                    "catalog load timed out after {} ms",
                    timeout.as_millis()
                )))
            }
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Mood};
    use std::io::Write;

    /// Never yields.
    struct StalledSource;

    impl CatalogSource for StalledSource {
        fn load(&self) -> BoxFuture<'_, Result<Vec<WallpaperRecord>>> {
            Box::pin(std::future::pending())
        }
    }

    struct BrokenSource;

    impl CatalogSource for BrokenSource {
        fn load(&self) -> BoxFuture<'_, Result<Vec<WallpaperRecord>>> {
            Box::pin(std::future::ready(Err(AuraError::Storage("disk gone".into()))))
        }
    }

    #[tokio::test]
    async fn static_source_is_idempotent() {
        let source = StaticSource::new(vec![
            WallpaperRecord::new("a", "A", Category::Cosmic, Mood::Calm),
            WallpaperRecord::new("b", "B", Category::Amoled, Mood::Night),
        ]);

        let first = source.load().await.unwrap();
        let second = source.load().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn json_file_source_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"a","imageUrl":"u","title":"Silent Cosmic 1","category":"Cosmic","mood":"Calm","keywords":["stars"]}}]"#
        )
        .unwrap();

        let source = JsonFileSource::new(file.path().to_path_buf());
        let records = source.load().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].keywords, vec!["stars"]);
    }

    #[tokio::test]
    async fn missing_file_is_data_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"));
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, AuraError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn malformed_file_is_data_unavailable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let source = JsonFileSource::new(file.path().to_path_buf());
        let err = source.load().await.unwrap_err();
        assert!(matches!(err, AuraError::DataUnavailable(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_source_times_out_as_unavailable() {
        let err = load_with_timeout(&StalledSource, Duration::from_millis(10_000))
            .await
            .unwrap_err();
        match err {
            AuraError::DataUnavailable(reason) => assert!(reason.contains("10000 ms")),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn other_errors_become_unavailable() {
        let err = load_with_timeout(&BrokenSource, Duration::from_secs(1))
            .await
            .unwrap_err();
        match err {
            AuraError::DataUnavailable(reason) => assert!(reason.contains("disk gone")),
            other => panic!("expected DataUnavailable, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fast_source_is_unaffected_by_timeout() {
        let source = StaticSource::new(vec![WallpaperRecord::new("a", "A", Category::Cosmic, Mood::Calm)]);
        let records = load_with_timeout(&source, Duration::from_millis(1)).await.unwrap();
        assert_eq!(records.len(), 1);
    }
}
