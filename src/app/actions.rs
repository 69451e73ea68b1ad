//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never performs I/O. It mutates state and returns a list
//! of [`Action`]s; the runtime (the shell binary, or a test) executes them and
//! feeds any outcome back in as a new event.

use super::modes::PreviewMode;
use super::timer::TimerHandle;
use std::time::Duration;

/// Side effects requested by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start loading the catalog from its source.
    ///
    /// The runtime answers with `Event::CatalogLoaded`.
    LoadCatalog,

    /// Schedule a one-shot timer.
    ///
    /// The runtime answers with `Event::TimerElapsed(handle)` after `delay`.
    ScheduleTimer {
        handle: TimerHandle,
        delay: Duration,
    },

    /// Cancel a previously scheduled timer. Late expiries are ignored anyway.
    CancelTimer(TimerHandle),

    /// Persist the favorites list (ids in display order).
    PersistFavorites(Vec<String>),

    /// Save the wallpaper image to the user's device.
    Download {
        id: String,
        image_url: String,
        file_name: String,
    },

    /// Set the wallpaper on the home or lock screen.
    ApplyWallpaper {
        id: String,
        image_url: String,
        target: PreviewMode,
    },

    /// End the session.
    Quit,
}
