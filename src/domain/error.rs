//! Error types for the AuraWalls core.
//!
//! This module defines the centralized error type [`AuraError`] and a type alias
//! [`Result`] used throughout the crate. None of these errors are fatal to a
//! browsing session: callers degrade to an empty or unchanged state and log.

use thiserror::Error;

/// The main error type for catalog, navigation, and storage operations.
///
/// # Examples
///
/// ```
/// use aurawalls::AuraError;
///
/// fn fetch() -> Result<(), AuraError> {
///     Err(AuraError::DataUnavailable("source offline".to_string()))
/// }
///
/// assert!(fetch().unwrap_err().is_recoverable());
/// ```
#[derive(Debug, Error)]
pub enum AuraError {
    /// The catalog could not be loaded from its source, or the load timed out.
    ///
    /// Surfaces as an "unavailable" catalog state. There is no automatic retry;
    /// the user can request one.
    #[error("Catalog unavailable: {0}")]
    DataUnavailable(String),

    /// An id does not resolve to a record in the currently loaded catalog.
    ///
    /// Typically a stale favorite after the catalog changed, or a selection
    /// request for an unknown id. Such ids are skipped.
    #[error("Wallpaper not found: {0}")]
    RecordNotFound(String),

    /// Reading or writing the key-value store failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AuraError {
    /// Whether the session can continue after this error.
    ///
    /// Every variant is recoverable except configuration errors, which are only
    /// produced at startup before a session exists.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Config(_))
    }
}

/// A specialized `Result` type for AuraWalls operations.
pub type Result<T> = std::result::Result<T, AuraError>;
