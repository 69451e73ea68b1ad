//! Filesystem locations for the data directory and its files.
//!
//! Handles tilde expansion and the platform data directory lookup.

use std::path::PathBuf;

/// File name of the key-value store inside the data directory.
pub const STORE_FILE_NAME: &str = "store.json";

/// File name of the default catalog inside the data directory.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// File name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "aurawalls.log";

/// Returns the default data directory for AuraWalls.
///
/// Resolves to the platform local data directory (`~/.local/share` on Linux)
/// joined with `aurawalls`, or `./aurawalls` when the platform offers none.
///
/// # Examples
///
/// ```
/// use aurawalls::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("aurawalls"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("aurawalls")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use aurawalls::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).to_string_lossy().into_owned()
    } else if path == "~" {
        home.to_string_lossy().into_owned()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_start() {
        assert_eq!(expand_tilde("walls/~/x"), "walls/~/x");
        assert_eq!(expand_tilde("~user/x"), "~user/x");
    }

    #[test]
    fn tilde_maps_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home.to_string_lossy());
            assert_eq!(
                PathBuf::from(expand_tilde("~/a/b")),
                home.join("a").join("b")
            );
        }
    }
}
