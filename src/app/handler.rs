//! Event handling and state transition logic.
//!
//! [`handle_event`] is the one entry point through which the runtime changes
//! application state. It dispatches each [`Event`] to a navigation transition
//! or catalog update and returns whether the view needs redrawing together
//! with the [`Action`]s to execute.
//!
//! # Event Types
//!
//! - **Lifecycle**: `TimerElapsed`, `SkipSplash`, `CatalogLoaded`,
//!   `CatalogUnavailable`, `RetryLoad`, `Quit`
//! - **Browsing**: `SelectMood`, `SelectCategory`, `SubmitSearch`,
//!   `SelectItem`, `Back`
//! - **Details**: `ToggleFavorite`, `SetPreviewMode`, `Download`, `Apply`
//! - **Appearance**: `ToggleTheme`
//!
//! # Example
//!
//! ```rust
//! use aurawalls::app::{handle_event, AppState, Event, Screen, Settings};
//! use aurawalls::storage::Favorites;
//!
//! let mut state = AppState::new(Favorites::default(), Settings::default());
//! let _startup = state.start();
//! let (render, actions) = handle_event(&mut state, &Event::SkipSplash)?;
//! assert!(render);
//! assert_eq!(state.nav.screen(), Screen::Home);
//! assert_eq!(actions.len(), 1); // cancel the splash timer
//! # Ok::<(), aurawalls::AuraError>(())
//! ```

use super::actions::Action;
use super::modes::PreviewMode;
use super::state::AppState;
use super::timer::TimerHandle;
use crate::domain::error::{AuraError, Result};
use crate::domain::{Category, Mood, WallpaperRecord};

/// Discrete occurrences the controller reacts to.
///
/// Events are processed one at a time, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A scheduled one-shot timer fired.
    TimerElapsed(TimerHandle),
    /// The user dismissed the splash screen early.
    SkipSplash,
    /// The catalog source delivered its records.
    CatalogLoaded(Vec<WallpaperRecord>),
    /// The catalog source failed or timed out.
    CatalogUnavailable(String),
    /// The user asked to retry a failed catalog load.
    RetryLoad,
    SelectMood(Mood),
    SelectCategory(Category),
    SubmitSearch(String),
    SelectItem(String),
    Back,
    ToggleFavorite(String),
    ToggleTheme,
    SetPreviewMode(PreviewMode),
    /// Download the wallpaper shown on the details screen.
    Download,
    /// Apply the wallpaper shown on the details screen to the preview target.
    Apply,
    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event left
/// every visible piece of state unchanged.
///
/// # Errors
///
/// No event currently produces an error: unknown ids, stale timers and
/// triggers that do not apply to the active screen are logged and ignored.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event), screen = ?state.nav.screen()).entered();

    match event {
        Event::TimerElapsed(handle) => Ok((state.nav.splash_elapsed(*handle), vec![])),
        Event::SkipSplash => {
            let pending = state.nav.pending_splash();
            if !state.nav.skip_splash() {
                return Ok((false, vec![]));
            }
            let actions: Vec<Action> = pending.map(Action::CancelTimer).into_iter().collect();
            Ok((true, actions))
        }
        Event::CatalogLoaded(records) => {
            state.catalog.finish_load(Ok(records.clone()));
            Ok((true, vec![]))
        }
        Event::CatalogUnavailable(reason) => {
            state
                .catalog
                .finish_load(Err(AuraError::DataUnavailable(reason.clone())));
            Ok((true, vec![]))
        }
        Event::RetryLoad => {
            if state.catalog.begin_reload() {
                tracing::debug!("retrying catalog load");
                Ok((true, vec![Action::LoadCatalog]))
            } else {
                Ok((false, vec![]))
            }
        }
        Event::SelectMood(mood) => Ok((state.nav.select_mood(*mood), vec![])),
        Event::SelectCategory(category) => Ok((state.nav.select_category(*category), vec![])),
        Event::SubmitSearch(query) => Ok((state.nav.submit_search(query), vec![])),
        Event::SelectItem(id) => match state.nav.select_item(id, &state.catalog) {
            Ok(changed) => Ok((changed, vec![])),
            Err(e) => {
                tracing::debug!(error = %e, "selection ignored");
                Ok((false, vec![]))
            }
        },
        Event::Back => Ok((state.nav.back(), vec![])),
        Event::ToggleFavorite(id) => {
            if !state.catalog.contains(id) {
                tracing::debug!(id = %id, "toggling favorite for id outside the loaded catalog");
            }
            state.nav.toggle_favorite(id);
            let ids = state.nav.favorites().ids().to_vec();
            Ok((true, vec![Action::PersistFavorites(ids)]))
        }
        Event::ToggleTheme => Ok((state.nav.toggle_theme(), vec![])),
        Event::SetPreviewMode(mode) => Ok((state.nav.set_preview_mode(*mode), vec![])),
        Event::Download => Ok((
            false,
            details_action(state, |record, _| Action::Download {
                id: record.id.clone(),
                image_url: record.image_url.clone(),
                file_name: record.download_file_name(),
            }),
        )),
        Event::Apply => Ok((
            false,
            details_action(state, |record, target| Action::ApplyWallpaper {
                id: record.id.clone(),
                image_url: record.image_url.clone(),
                target,
            }),
        )),
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Builds an action for the wallpaper on the details screen, if there is one.
fn details_action<F>(state: &AppState, build: F) -> Vec<Action>
where
    F: FnOnce(&WallpaperRecord, PreviewMode) -> Action,
{
    if state.nav.screen() != super::modes::Screen::Details {
        tracing::debug!("details action outside the details screen ignored");
        return vec![];
    }
    match state.nav.selected_record(&state.catalog) {
        Some(record) => vec![build(record, state.nav.preview_mode())],
        None => {
            tracing::warn!(id = ?state.nav.selected_id(), "selected wallpaper no longer in catalog");
            vec![]
        }
    }
}

/// Debug helper that names an event without dumping record payloads.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::CatalogLoaded(records) => write!(f, "CatalogLoaded({} records)", records.len()),
            other => write!(f, "{other:?}"),
        }
    }
}
