//! Domain layer: wallpaper entities and the crate-wide error type.
//!
//! Nothing here depends on storage, the async runtime, or presentation.
//!
//! - [`error`]: Error types and result aliases
//! - [`wallpaper`]: `WallpaperRecord`, `Mood`, `Category`

pub mod error;
pub mod wallpaper;

pub use error::{AuraError, Result};
pub use wallpaper::{Category, Mood, WallpaperRecord};
