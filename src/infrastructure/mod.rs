//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where AuraWalls keeps its store, catalog and log file.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, CATALOG_FILE_NAME, LOG_FILE_NAME, STORE_FILE_NAME};
