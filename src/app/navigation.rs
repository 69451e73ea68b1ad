//! Navigation state and its transition operations.
//!
//! [`NavigationState`] is the single owned container for "where the user is":
//! the active screen, the browse filter, the selected wallpaper and the
//! favorites. Its fields are private; every mutation goes through a named
//! transition so the transition table below is the whole story.
//!
//! | From          | Trigger                  | To      | Effect                          |
//! |---------------|--------------------------|---------|---------------------------------|
//! | Splash        | splash timer (matching)  | Home    |                                 |
//! | Splash        | skip                     | Home    | pending timer dropped           |
//! | Home          | `select_mood`            | List    | filter = mood                   |
//! | Home          | `select_category`        | List    | filter = category               |
//! | Home, List    | `submit_search`          | List    | filter = query (blank ⇒ none)   |
//! | Home, List    | `select_item`            | Details | selected id set                 |
//! | List          | `back`                   | Home    | filter cleared                  |
//! | Details       | `back`                   | List    | selected id cleared             |
//! | any           | `toggle_favorite`        | same    | favorites membership flipped    |
//! | Home          | `toggle_theme`           | same    | dark mode flipped               |
//! | Details       | `set_preview_mode`       | same    | preview target set              |
//!
//! Any other trigger is ignored and leaves the state untouched. Each operation
//! returns whether the state changed, except `toggle_favorite`, which always
//! changes it and returns whether the id is a favorite afterwards.

use super::modes::{PreviewMode, Screen};
use super::timer::TimerHandle;
use crate::catalog::{Catalog, Filter};
use crate::domain::error::Result;
use crate::domain::{Category, Mood, WallpaperRecord};
use crate::storage::Favorites;

/// The navigation state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    screen: Screen,
    filter: Filter,
    selected_id: Option<String>,
    favorites: Favorites,
    dark_mode: bool,
    preview_mode: PreviewMode,
    pending_splash: Option<TimerHandle>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(Favorites::default())
    }
}

impl NavigationState {
    /// Initial state: splash screen, no filter, dark mode, given favorites.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurawalls::app::{NavigationState, Screen};
    /// use aurawalls::storage::Favorites;
    ///
    /// let nav = NavigationState::new(Favorites::from_ids(["a"]));
    /// assert_eq!(nav.screen(), Screen::Splash);
    /// assert!(nav.is_favorite("a"));
    /// ```
    #[must_use]
    pub const fn new(favorites: Favorites) -> Self {
        Self {
            screen: Screen::Splash,
            filter: Filter::None,
            selected_id: None,
            favorites,
            dark_mode: true,
            preview_mode: PreviewMode::HomeScreen,
            pending_splash: None,
        }
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub const fn mood_filter(&self) -> Option<Mood> {
        self.filter.mood()
    }

    #[must_use]
    pub const fn category_filter(&self) -> Option<Category> {
        self.filter.category()
    }

    /// Active text query, `""` when no search filter is set.
    #[must_use]
    pub fn search_query(&self) -> &str {
        self.filter.query()
    }

    #[must_use]
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Resolves the selection against `catalog`, `None` if unset or stale.
    #[must_use]
    pub fn selected_record<'a>(&self, catalog: &'a Catalog) -> Option<&'a WallpaperRecord> {
        self.selected_id.as_deref().and_then(|id| catalog.get(id).ok())
    }

    #[must_use]
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub const fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    #[must_use]
    pub const fn preview_mode(&self) -> PreviewMode {
        self.preview_mode
    }

    /// Handle of the splash timer that will move the app to Home, if armed.
    #[must_use]
    pub const fn pending_splash(&self) -> Option<TimerHandle> {
        self.pending_splash
    }

    /// Records the splash timer handle. Only meaningful on the splash screen.
    pub fn arm_splash(&mut self, handle: TimerHandle) -> bool {
        if self.screen != Screen::Splash {
            return self.ignored("arm_splash");
        }
        self.pending_splash = Some(handle);
        true
    }

    /// Splash timer expiry. Only the currently armed handle advances to Home.
    pub fn splash_elapsed(&mut self, handle: TimerHandle) -> bool {
        if self.screen != Screen::Splash || self.pending_splash != Some(handle) {
            tracing::debug!(handle = handle.id(), "stale splash timer ignored");
            return false;
        }
        self.pending_splash = None;
        self.screen = Screen::Home;
        tracing::debug!("splash complete");
        true
    }

    /// Leaves the splash screen early, disarming its timer.
    pub fn skip_splash(&mut self) -> bool {
        if self.screen != Screen::Splash {
            return self.ignored("skip_splash");
        }
        self.pending_splash = None;
        self.screen = Screen::Home;
        true
    }

    /// Opens the list filtered by `mood`. Home only.
    pub fn select_mood(&mut self, mood: Mood) -> bool {
        if self.screen != Screen::Home {
            return self.ignored("select_mood");
        }
        self.show_list(Filter::ByMood(mood));
        true
    }

    /// Opens the list filtered by `category`. Home only.
    pub fn select_category(&mut self, category: Category) -> bool {
        if self.screen != Screen::Home {
            return self.ignored("select_category");
        }
        self.show_list(Filter::ByCategory(category));
        true
    }

    /// Opens (or refreshes) the list for a text query. Home or List.
    ///
    /// The query is trimmed; a blank query shows the whole catalog.
    pub fn submit_search(&mut self, query: &str) -> bool {
        if !matches!(self.screen, Screen::Home | Screen::List) {
            return self.ignored("submit_search");
        }
        self.show_list(Filter::search(query));
        true
    }

    fn show_list(&mut self, filter: Filter) {
        tracing::debug!(from = ?self.screen, filter = ?filter, "showing list");
        self.filter = filter;
        self.selected_id = None;
        self.screen = Screen::List;
    }

    /// Opens the details screen for `id`. Home or List.
    ///
    /// # Errors
    ///
    /// Returns [`AuraError::RecordNotFound`](crate::AuraError::RecordNotFound)
    /// if `id` is not in `catalog`; the state is left unchanged.
    pub fn select_item(&mut self, id: &str, catalog: &Catalog) -> Result<bool> {
        if !matches!(self.screen, Screen::Home | Screen::List) {
            return Ok(self.ignored("select_item"));
        }
        let record = catalog.get(id)?;
        tracing::debug!(id = %record.id, from = ?self.screen, "opening details");
        self.selected_id = Some(record.id.clone());
        self.preview_mode = PreviewMode::HomeScreen;
        self.screen = Screen::Details;
        Ok(true)
    }

    /// Fixed per-screen back navigation.
    ///
    /// Details returns to List keeping the filter; List returns to Home and
    /// clears the filter. Splash and Home have nowhere to go back to.
    pub fn back(&mut self) -> bool {
        match self.screen {
            Screen::Details => {
                self.selected_id = None;
                self.screen = Screen::List;
                true
            }
            Screen::List => {
                self.filter = Filter::None;
                self.screen = Screen::Home;
                true
            }
            Screen::Splash | Screen::Home => self.ignored("back"),
        }
    }

    /// Flips favorite membership of `id`; allowed on every screen.
    ///
    /// Returns `true` if `id` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let now_favorite = self.favorites.toggle(id);
        tracing::debug!(id = %id, now_favorite, "favorite toggled");
        now_favorite
    }

    /// Switches between dark and light appearance. Home only.
    pub fn toggle_theme(&mut self) -> bool {
        if self.screen != Screen::Home {
            return self.ignored("toggle_theme");
        }
        self.dark_mode = !self.dark_mode;
        true
    }

    /// Chooses the preview target on the details screen.
    pub fn set_preview_mode(&mut self, mode: PreviewMode) -> bool {
        if self.screen != Screen::Details {
            return self.ignored("set_preview_mode");
        }
        if self.preview_mode == mode {
            return false;
        }
        self.preview_mode = mode;
        true
    }

    fn ignored(&self, trigger: &'static str) -> bool {
        tracing::debug!(screen = ?self.screen, trigger, "trigger ignored on this screen");
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::timer::TimerIds;
    use crate::AuraError;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            WallpaperRecord::new("a", "Silent Cosmic 1", Category::Cosmic, Mood::Calm)
                .with_keywords(["stars"]),
            WallpaperRecord::new("b", "Deep Cosmic 2", Category::Cosmic, Mood::Night)
                .with_keywords(["dark"]),
        ])
    }

    fn at_home() -> NavigationState {
        let mut nav = NavigationState::default();
        assert!(nav.skip_splash());
        nav
    }

    fn assert_single_filter(nav: &NavigationState) {
        let set = [
            nav.mood_filter().is_some(),
            nav.category_filter().is_some(),
            !nav.search_query().is_empty(),
        ];
        assert!(set.iter().filter(|s| **s).count() <= 1);
    }

    #[test]
    fn initial_state() {
        let nav = NavigationState::default();
        assert_eq!(nav.screen(), Screen::Splash);
        assert_eq!(nav.filter(), &Filter::None);
        assert!(nav.selected_id().is_none());
        assert!(nav.dark_mode());
    }

    #[test]
    fn splash_advances_only_on_armed_handle() {
        let mut ids = TimerIds::default();
        let armed = ids.next_handle();
        let stale = ids.next_handle();

        let mut nav = NavigationState::default();
        assert!(nav.arm_splash(armed));

        assert!(!nav.splash_elapsed(stale));
        assert_eq!(nav.screen(), Screen::Splash);

        assert!(nav.splash_elapsed(armed));
        assert_eq!(nav.screen(), Screen::Home);
        assert!(nav.pending_splash().is_none());

        assert!(!nav.splash_elapsed(armed));
    }

    #[test]
    fn skipped_splash_ignores_later_expiry() {
        let mut ids = TimerIds::default();
        let handle = ids.next_handle();

        let mut nav = NavigationState::default();
        nav.arm_splash(handle);
        assert!(nav.skip_splash());
        assert!(!nav.splash_elapsed(handle));
        assert_eq!(nav.screen(), Screen::Home);
    }

    #[test]
    fn filters_are_mutually_exclusive() {
        let mut nav = at_home();

        assert!(nav.select_mood(Mood::Calm));
        assert_eq!(nav.mood_filter(), Some(Mood::Calm));
        assert_eq!(nav.category_filter(), None);
        assert_eq!(nav.search_query(), "");
        assert_single_filter(&nav);

        nav.back();
        assert!(nav.select_category(Category::Spiritual));
        assert_eq!(nav.category_filter(), Some(Category::Spiritual));
        assert_eq!(nav.mood_filter(), None);
        assert_eq!(nav.search_query(), "");

        assert!(nav.submit_search("zen"));
        assert_eq!(nav.search_query(), "zen");
        assert_eq!(nav.mood_filter(), None);
        assert_eq!(nav.category_filter(), None);
        assert_single_filter(&nav);
    }

    #[test]
    fn search_from_list_replaces_query_and_stays_on_list() {
        let mut nav = at_home();
        nav.select_mood(Mood::Night);
        assert!(nav.submit_search("dark"));
        assert_eq!(nav.screen(), Screen::List);
        assert_eq!(nav.filter(), &Filter::BySearch("dark".to_string()));

        assert!(nav.submit_search("stars"));
        assert_eq!(nav.search_query(), "stars");
    }

    #[test]
    fn blank_search_shows_everything() {
        let mut nav = at_home();
        assert!(nav.submit_search("   "));
        assert_eq!(nav.screen(), Screen::List);
        assert_eq!(nav.filter(), &Filter::None);
    }

    #[test]
    fn mood_and_category_only_from_home() {
        let mut nav = at_home();
        nav.submit_search("x");
        assert!(!nav.select_mood(Mood::Calm));
        assert!(!nav.select_category(Category::Cosmic));
        assert_eq!(nav.search_query(), "x");
    }

    #[test]
    fn end_to_end_category_details_and_back() {
        let catalog = catalog();
        let mut nav = at_home();

        nav.select_category(Category::Amoled);
        assert_eq!(nav.screen(), Screen::List);
        assert_eq!(nav.category_filter(), Some(Category::Amoled));

        assert!(nav.select_item("a", &catalog).unwrap());
        assert_eq!(nav.screen(), Screen::Details);
        assert_eq!(nav.selected_id(), Some("a"));

        assert!(nav.back());
        assert_eq!(nav.screen(), Screen::List);
        assert_eq!(nav.category_filter(), Some(Category::Amoled));
        assert!(nav.selected_id().is_none());

        assert!(nav.back());
        assert_eq!(nav.screen(), Screen::Home);
        assert_eq!(nav.category_filter(), None);
    }

    #[test]
    fn details_from_home_backs_into_list() {
        let catalog = catalog();
        let mut nav = at_home();

        nav.select_item("b", &catalog).unwrap();
        assert!(nav.back());
        assert_eq!(nav.screen(), Screen::List);
        assert_eq!(nav.filter(), &Filter::None);
    }

    #[test]
    fn back_is_a_no_op_on_home_and_splash() {
        let mut nav = NavigationState::default();
        assert!(!nav.back());
        assert_eq!(nav.screen(), Screen::Splash);

        let mut nav = at_home();
        assert!(!nav.back());
        assert_eq!(nav.screen(), Screen::Home);
    }

    #[test]
    fn unknown_item_leaves_state_unchanged() {
        let catalog = catalog();
        let mut nav = at_home();
        nav.select_mood(Mood::Calm);
        let before = nav.clone();

        let err = nav.select_item("ghost", &catalog).unwrap_err();
        assert!(matches!(err, AuraError::RecordNotFound(_)));
        assert_eq!(nav, before);
    }

    #[test]
    fn favorites_toggle_on_any_screen_without_moving() {
        let catalog = catalog();
        let mut nav = at_home();
        nav.select_item("a", &catalog).unwrap();

        assert!(nav.toggle_favorite("a"));
        assert_eq!(nav.screen(), Screen::Details);
        assert!(nav.is_favorite("a"));

        assert!(!nav.toggle_favorite("a"));
        assert!(!nav.is_favorite("a"));
    }

    #[test]
    fn unfavoriting_changes_state_despite_false_return() {
        let mut nav = at_home();
        nav.toggle_favorite("a");
        let before = nav.clone();

        assert!(!nav.toggle_favorite("a"));
        assert_ne!(nav, before);
        assert!(nav.favorites().is_empty());
    }

    #[test]
    fn preview_mode_resets_when_opening_details() {
        let catalog = catalog();
        let mut nav = at_home();
        nav.select_item("a", &catalog).unwrap();
        assert!(nav.set_preview_mode(PreviewMode::LockScreen));
        assert!(!nav.set_preview_mode(PreviewMode::LockScreen));

        nav.back();
        nav.select_item("b", &catalog).unwrap();
        assert_eq!(nav.preview_mode(), PreviewMode::HomeScreen);
    }

    #[test]
    fn theme_toggles_on_home_only() {
        let mut nav = at_home();
        assert!(nav.toggle_theme());
        assert!(!nav.dark_mode());

        nav.submit_search("x");
        assert!(!nav.toggle_theme());
        assert!(!nav.dark_mode());
    }
}
