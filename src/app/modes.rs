//! Screen and preview mode enums.
//!
//! # State Machine
//!
//! Exactly one [`Screen`] is active at a time:
//!
//! ```text
//! Splash ──timer/skip──▶ Home ──mood/category/search──▶ List ──item──▶ Details
//!                         │ ▲                            │ ▲              │
//!                         │ └──────────── back ──────────┘ └──── back ────┘
//!                         └───────────────── item ───────────────────────▶
//! ```
//!
//! Back navigation is fixed per screen, not a history stack.

/// The active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Start-up branding, left automatically when the splash timer fires.
    #[default]
    Splash,
    /// Featured feed, mood picker and category grid.
    Home,
    /// Filtered results for the active [`Filter`](crate::catalog::Filter).
    List,
    /// A single wallpaper with favorite, download and apply actions.
    Details,
}

/// Which device screen the details preview (and "apply") targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMode {
    #[default]
    HomeScreen,
    LockScreen,
}

impl PreviewMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HomeScreen => "Home Screen",
            Self::LockScreen => "Lock Screen",
        }
    }
}
