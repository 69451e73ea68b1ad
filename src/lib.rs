//! AuraWalls: a wallpaper catalog query engine and navigation state machine.
//!
//! AuraWalls provides:
//! - Mood, category and free-text queries over an in-memory wallpaper catalog
//! - A screen state machine (Splash → Home → List → Details) with explicit
//!   transitions and a cancellable splash timer
//! - A persisted favorites set backed by a JSON key-value store
//! - Display-ready view models and a plain-text renderer
//! - A line-driven shell binary that exercises the whole system

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Shell binary (main.rs)                             │  ← stdin, tokio runtime
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Catalog Layer │
//! │ (ui/)         │   │ (storage/)    │   │ (catalog/)    │
//! │ - View models │   │ - JSON I/O    │   │ - Queries     │
//! │ - Text output │   │ - Favorites   │   │ - Sources     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Error types (domain/error)                       │
//! │  - Wallpaper model (domain/wallpaper)               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber fmt layer                     │
//! │  - Size-rotated log file                            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Navigation state machine with event/action model
//! - [`catalog`]: Record queries, load lifecycle and data sources
//! - [`domain`]: Core domain types (`WallpaperRecord`, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: Key-value persistence and favorites
//! - [`ui`]: View models and text rendering
//! - [`observability`]: Log file setup
//!
//! # Configuration
//!
//! Settings come from an optional TOML file, then command-line flags:
//!
//! ```toml
//! # ~/.config/aurawalls/config.toml
//! catalog_path = "~/wallpapers/catalog.json"
//! splash_delay_ms = 1500
//! featured_limit = 12
//! trace_level = "debug"
//! ```
//!
//! # Initialization Flow
//!
//! 1. Load [`Config`], install tracing
//! 2. Open the key-value store and read favorites
//! 3. [`initialize`] builds [`AppState`] on the splash screen and returns
//!    `[ScheduleTimer, LoadCatalog]`
//! 4. The runtime executes actions and feeds outcomes back as [`Event`]s
//!
//! # Example
//!
//! ```rust
//! use aurawalls::storage::Favorites;
//! use aurawalls::{handle_event, initialize, Category, Config, Event, Mood, Screen, WallpaperRecord};
//!
//! let (mut state, actions) = initialize(&Config::default(), Favorites::default());
//! assert_eq!(actions.len(), 2);
//!
//! let records = vec![WallpaperRecord::new("a", "Silent Cosmic 1", Category::Cosmic, Mood::Calm)];
//! for event in [
//!     Event::CatalogLoaded(records),
//!     Event::SkipSplash,
//!     Event::SelectMood(Mood::Calm),
//! ] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.nav.screen(), Screen::List);
//! # Ok::<(), aurawalls::AuraError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod storage;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, PreviewMode, Screen, Settings};
pub use domain::{AuraError, Category, Mood, Result, WallpaperRecord};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_SPLASH_DELAY_MS: u64 = 3000;
const DEFAULT_LOAD_TIMEOUT_MS: u64 = 10_000;

/// Runtime configuration.
///
/// Every field has a default, so an empty TOML file or no file at all is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the catalog array.
    ///
    /// `~` is expanded. Default: `<data_dir>/catalog.json`
    pub catalog_path: Option<String>,

    /// Directory for the favorites store and the log file.
    ///
    /// Default: the platform local data directory joined with `aurawalls`.
    pub data_dir: Option<String>,

    /// Splash screen duration in milliseconds. Default: 3000
    pub splash_delay_ms: u64,

    /// Maximum wallpapers on the home feed. Default: 20
    pub featured_limit: usize,

    /// Catalog load timeout in milliseconds. Default: 10000
    pub load_timeout_ms: u64,

    /// Log filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `EnvFilter` directive. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            data_dir: None,
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            featured_limit: catalog::HOME_FEATURED_LIMIT,
            load_timeout_ms: DEFAULT_LOAD_TIMEOUT_MS,
            trace_level: None,
        }
    }
}

impl Config {
    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`AuraError::Io`] if the file cannot be read and
    /// [`AuraError::Config`] if it is not valid TOML for this schema.
    pub fn from_file(path: &Path) -> Result<Self> {
        let _span = tracing::debug_span!("config_from_file", path = ?path).entered();

        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| AuraError::Config(format!("{}: {e}", path.display())))
    }

    /// Parses configuration from a string map, starting from defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use aurawalls::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("featured_limit".to_string(), "8".to_string());
    /// map.insert("splash_delay_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.featured_limit, 8);
    /// assert_eq!(config.splash_delay_ms, 3000);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        Self::default().apply(map)
    }

    /// Overrides fields with values from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_path`, `data_dir`, `trace_level`: taken as-is, blank ignored
    /// - `splash_delay_ms`, `load_timeout_ms`, `featured_limit`: parsed as
    ///   integers; an unparseable value keeps the current setting
    /// - unknown keys are ignored
    #[must_use]
    pub fn apply(mut self, map: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            map.get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        if let Some(path) = text("catalog_path") {
            self.catalog_path = Some(path);
        }
        if let Some(dir) = text("data_dir") {
            self.data_dir = Some(dir);
        }
        if let Some(level) = text("trace_level") {
            self.trace_level = Some(level);
        }

        self.splash_delay_ms = parse_or(map, "splash_delay_ms", self.splash_delay_ms);
        self.load_timeout_ms = parse_or(map, "load_timeout_ms", self.load_timeout_ms);
        self.featured_limit = parse_or(map, "featured_limit", self.featured_limit);
        self
    }

    /// Resolved data directory.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.as_deref().map_or_else(
            infrastructure::get_data_dir,
            |dir| PathBuf::from(infrastructure::expand_tilde(dir)),
        )
    }

    /// Resolved catalog file path.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog_path.as_deref().map_or_else(
            || self.data_dir().join(infrastructure::CATALOG_FILE_NAME),
            |path| PathBuf::from(infrastructure::expand_tilde(path)),
        )
    }

    #[must_use]
    pub const fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    /// Controller settings derived from this configuration.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        Settings {
            splash_delay: Duration::from_millis(self.splash_delay_ms),
            featured_limit: self.featured_limit,
        }
    }
}

fn parse_or<T: std::str::FromStr>(map: &BTreeMap<String, String>, key: &str, current: T) -> T {
    match map.get(key).map(|s| s.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            tracing::warn!(key = key, "ignoring unparseable config value");
            current
        }
        None => current,
    }
}

/// Builds the initial application state.
///
/// The state starts on the splash screen with the catalog loading and the
/// given favorites. The returned actions (`ScheduleTimer`, `LoadCatalog`) must
/// be executed by the runtime.
///
/// # Example
///
/// ```rust
/// use aurawalls::storage::Favorites;
/// use aurawalls::{initialize, Action, Config};
///
/// let (state, actions) = initialize(&Config::default(), Favorites::default());
/// assert!(state.catalog.is_loading());
/// assert_eq!(actions[1], Action::LoadCatalog);
/// ```
pub fn initialize(config: &Config, favorites: storage::Favorites) -> (AppState, Vec<Action>) {
    tracing::debug!(favorites = favorites.len(), "initializing aurawalls");

    let mut state = AppState::new(favorites, config.settings());
    let actions = state.start();
    (state, actions)
}
