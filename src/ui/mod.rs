//! Presentation layer: view models and a plain-text renderer.
//!
//! ```text
//! AppState → compute_view → ScreenView → render_text → text lines
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: per-screen display data
//! - [`renderer`]: line-oriented text output for the shell

pub mod renderer;
pub mod viewmodel;

pub use renderer::render_text;
pub use viewmodel::{
    compute_view, favorite_cards, DetailsView, EmptyState, HomeView, ListView, ScreenView,
    SplashView, WallpaperCard,
};
