//! Application state container.
//!
//! [`AppState`] bundles everything the event handler reads or writes: the
//! navigation state machine, the session catalog, timer bookkeeping and the
//! few settings that shape behavior. It is owned by one controller and passed
//! by reference to the view layer; there is no global state.

use super::actions::Action;
use super::navigation::NavigationState;
use super::timer::{TimerIds, DEFAULT_SPLASH_DELAY};
use crate::catalog::{Catalog, HOME_FEATURED_LIMIT};
use crate::storage::Favorites;
use std::time::Duration;

/// Behavior knobs taken from [`Config`](crate::Config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// How long the splash screen stays up before advancing to Home.
    pub splash_delay: Duration,
    /// Maximum number of featured wallpapers on the home feed.
    pub featured_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            splash_delay: DEFAULT_SPLASH_DELAY,
            featured_limit: HOME_FEATURED_LIMIT,
        }
    }
}

/// Central application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub nav: NavigationState,
    pub catalog: Catalog,
    pub settings: Settings,
    pub(crate) timers: TimerIds,
}

impl AppState {
    /// Creates the initial state: splash screen, catalog loading.
    ///
    /// Nothing is scheduled yet; use [`AppState::start`] (or
    /// [`crate::initialize`]) to obtain the start-up actions.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurawalls::app::{AppState, Screen, Settings};
    /// use aurawalls::storage::Favorites;
    ///
    /// let state = AppState::new(Favorites::default(), Settings::default());
    /// assert_eq!(state.nav.screen(), Screen::Splash);
    /// assert!(state.catalog.is_loading());
    /// ```
    #[must_use]
    pub fn new(favorites: Favorites, settings: Settings) -> Self {
        Self {
            nav: NavigationState::new(favorites),
            catalog: Catalog::new(),
            settings,
            timers: TimerIds::default(),
        }
    }

    /// Arms the splash timer and requests the catalog load.
    ///
    /// Returns the actions the runtime must execute to get the session going.
    pub fn start(&mut self) -> Vec<Action> {
        let handle = self.timers.next_handle();
        self.nav.arm_splash(handle);

        tracing::debug!(
            handle = handle.id(),
            delay_ms = u64::try_from(self.settings.splash_delay.as_millis()).unwrap_or(u64::MAX),
            "session starting"
        );

        vec![
            Action::ScheduleTimer {
                handle,
                delay: self.settings.splash_delay,
            },
            Action::LoadCatalog,
        ]
    }
}
