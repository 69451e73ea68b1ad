//! View models representing renderable screen state.
//!
//! A [`ScreenView`] is computed from [`AppState`] on demand and holds only
//! display-ready data: titles, labels, cards, and empty-state messages. It
//! contains no business logic, so any front end (the text shell, a GUI, a
//! test) can consume it.
//!
//! # Example
//!
//! ```rust
//! use aurawalls::app::{AppState, Settings};
//! use aurawalls::storage::Favorites;
//! use aurawalls::ui::{compute_view, ScreenView};
//!
//! let state = AppState::new(Favorites::default(), Settings::default());
//! assert!(matches!(compute_view(&state), ScreenView::Splash(_)));
//! ```

use crate::app::{AppState, PreviewMode, Screen};
use crate::catalog::{self, LoadState};
use crate::domain::{Category, Mood, WallpaperRecord};

/// Brand name shown on the splash screen.
pub const APP_NAME: &str = "AuraWalls";

/// Tagline shown under the brand name.
pub const TAGLINE: &str = "Pure Aesthetics";

/// The screen to draw, with its data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    Splash(SplashView),
    Home(HomeView),
    List(ListView),
    Details(DetailsView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashView {
    pub app_name: String,
    pub tagline: String,
}

/// One wallpaper tile as it appears in feeds and grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallpaperCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub resolution: String,
    /// `Some("PRO")` for premium wallpapers.
    pub badge: Option<String>,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    /// "Today's Picks"; empty while the catalog is loading.
    pub featured: Vec<WallpaperCard>,
    /// Favorites present in the catalog, in the order they were added.
    pub favorites: Vec<WallpaperCard>,
    pub moods: Vec<Mood>,
    /// Category tiles with their item counts.
    pub categories: Vec<(Category, usize)>,
    pub loading: bool,
    pub empty_state: Option<EmptyState>,
    pub dark_mode: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    /// Filter heading: a mood or category label, a quoted query, or "All Wallpapers".
    pub title: String,
    /// e.g. "12 Wallpapers Found".
    pub count_label: String,
    pub items: Vec<WallpaperCard>,
    pub loading: bool,
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub card: WallpaperCard,
    pub mood: String,
    pub keywords: Vec<String>,
    pub preview_mode: PreviewMode,
}

/// Message shown in place of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

impl EmptyState {
    fn no_results() -> Self {
        Self {
            message: "No results found".to_string(),
            subtitle: "Try searching for something else or explore different categories."
                .to_string(),
        }
    }

    fn unavailable(reason: &str) -> Self {
        Self {
            message: "Wallpapers unavailable".to_string(),
            subtitle: format!("{reason}. Type 'retry' to try again."),
        }
    }
}

/// Computes the view for the active screen.
///
/// A details screen whose selection no longer resolves falls back to the list
/// view rather than failing.
#[must_use]
pub fn compute_view(state: &AppState) -> ScreenView {
    let _span = tracing::debug_span!("compute_view", screen = ?state.nav.screen()).entered();

    match state.nav.screen() {
        Screen::Splash => ScreenView::Splash(SplashView {
            app_name: APP_NAME.to_string(),
            tagline: TAGLINE.to_string(),
        }),
        Screen::Home => ScreenView::Home(compute_home(state)),
        Screen::List => ScreenView::List(compute_list(state)),
        Screen::Details => state.nav.selected_record(&state.catalog).map_or_else(
            || {
                tracing::warn!(id = ?state.nav.selected_id(), "details view without a resolvable selection");
                ScreenView::List(compute_list(state))
            },
            |record| {
                ScreenView::Details(DetailsView {
                    card: card_for(state, record),
                    mood: record.mood.label().to_string(),
                    keywords: record.keywords.clone(),
                    preview_mode: state.nav.preview_mode(),
                })
            },
        ),
    }
}

fn compute_home(state: &AppState) -> HomeView {
    let records = state.catalog.records();
    let featured = catalog::featured(records, Some(state.settings.featured_limit))
        .into_iter()
        .map(|w| card_for(state, w))
        .collect();

    HomeView {
        featured,
        favorites: favorite_cards(state),
        moods: Mood::ALL.to_vec(),
        categories: catalog::count_by_category(records),
        loading: state.catalog.is_loading(),
        empty_state: state.catalog.unavailable_reason().map(EmptyState::unavailable),
        dark_mode: state.nav.dark_mode(),
    }
}

fn compute_list(state: &AppState) -> ListView {
    let filter = state.nav.filter();
    let items: Vec<WallpaperCard> = catalog::apply_filter(state.catalog.records(), filter)
        .into_iter()
        .map(|w| card_for(state, w))
        .collect();

    let empty_state = match state.catalog.state() {
        LoadState::Unavailable(reason) => Some(EmptyState::unavailable(reason)),
        LoadState::Ready(_) if items.is_empty() => Some(EmptyState::no_results()),
        LoadState::Ready(_) | LoadState::Loading => None,
    };

    ListView {
        title: filter.title(),
        count_label: format!("{} Wallpapers Found", items.len()),
        items,
        loading: state.catalog.is_loading(),
        empty_state,
    }
}

fn card_for(state: &AppState, record: &WallpaperRecord) -> WallpaperCard {
    WallpaperCard {
        id: record.id.clone(),
        title: record.title.clone(),
        category: record.category.label().to_string(),
        resolution: record.resolution.clone(),
        badge: record.is_premium.then(|| "PRO".to_string()),
        is_favorite: state.nav.is_favorite(&record.id),
    }
}

/// Favorites resolved against the loaded catalog, stale ids skipped.
#[must_use]
pub fn favorite_cards(state: &AppState) -> Vec<WallpaperCard> {
    state
        .catalog
        .resolve(state.nav.favorites().ids())
        .into_iter()
        .map(|w| card_for(state, w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, Settings};
    use crate::storage::Favorites;

    fn records() -> Vec<WallpaperRecord> {
        vec![
            WallpaperRecord::new("e1", "Golden Earth 1", Category::EarthTones, Mood::Calm)
                .with_keywords(["forest"])
                .featured(true),
            WallpaperRecord::new("c1", "Mystic Cosmic 1", Category::Cosmic, Mood::Night)
                .with_keywords(["nebula"])
                .featured(true)
                .premium(true),
            WallpaperRecord::new("c2", "Wild Cosmic 2", Category::Cosmic, Mood::Calm)
                .with_keywords(["galaxy"]),
        ]
    }

    fn home_state(favorites: &[&str]) -> AppState {
        let mut state = AppState::new(Favorites::from_ids(favorites.iter().copied()), Settings::default());
        state.start();
        handle_event(&mut state, &Event::CatalogLoaded(records())).unwrap();
        handle_event(&mut state, &Event::SkipSplash).unwrap();
        state
    }

    #[test]
    fn home_lists_featured_and_category_counts() {
        let state = home_state(&["c1"]);
        let ScreenView::Home(home) = compute_view(&state) else {
            panic!("expected home view");
        };
        let ids: Vec<&str> = home.featured.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["e1", "c1"]);
        assert_eq!(home.featured[1].badge.as_deref(), Some("PRO"));
        assert!(home.featured[1].is_favorite);
        assert!(home.categories.contains(&(Category::Cosmic, 2)));
        assert_eq!(home.favorites.len(), 1);
        assert!(!home.loading);
    }

    #[test]
    fn featured_limit_caps_home_feed() {
        let mut state = home_state(&[]);
        state.settings.featured_limit = 1;
        let ScreenView::Home(home) = compute_view(&state) else {
            panic!("expected home view");
        };
        assert_eq!(home.featured.len(), 1);
    }

    #[test]
    fn list_title_and_count_follow_filter() {
        let mut state = home_state(&[]);
        handle_event(&mut state, &Event::SelectCategory(Category::Cosmic)).unwrap();
        let ScreenView::List(list) = compute_view(&state) else {
            panic!("expected list view");
        };
        assert_eq!(list.title, "Cosmic");
        assert_eq!(list.count_label, "2 Wallpapers Found");
        assert!(list.empty_state.is_none());
    }

    #[test]
    fn empty_search_shows_no_results() {
        let mut state = home_state(&[]);
        handle_event(&mut state, &Event::SubmitSearch("zzz".into())).unwrap();
        let ScreenView::List(list) = compute_view(&state) else {
            panic!("expected list view");
        };
        assert_eq!(list.title, "\"zzz\"");
        assert_eq!(list.count_label, "0 Wallpapers Found");
        assert_eq!(list.empty_state.unwrap().message, "No results found");
    }

    #[test]
    fn unavailable_catalog_shows_retry_hint() {
        let mut state = AppState::new(Favorites::default(), Settings::default());
        state.start();
        handle_event(&mut state, &Event::CatalogUnavailable("timed out".into())).unwrap();
        handle_event(&mut state, &Event::SkipSplash).unwrap();
        handle_event(&mut state, &Event::SubmitSearch(String::new())).unwrap();

        let ScreenView::List(list) = compute_view(&state) else {
            panic!("expected list view");
        };
        let empty = list.empty_state.unwrap();
        assert_eq!(empty.message, "Wallpapers unavailable");
        assert!(empty.subtitle.contains("timed out"));
    }

    #[test]
    fn details_view_carries_preview_mode() {
        let mut state = home_state(&[]);
        handle_event(&mut state, &Event::SelectItem("c2".into())).unwrap();
        handle_event(&mut state, &Event::SetPreviewMode(PreviewMode::LockScreen)).unwrap();
        let ScreenView::Details(details) = compute_view(&state) else {
            panic!("expected details view");
        };
        assert_eq!(details.card.title, "Wild Cosmic 2");
        assert_eq!(details.mood, "Calm");
        assert_eq!(details.preview_mode, PreviewMode::LockScreen);
    }

    #[test]
    fn stale_favorites_are_skipped() {
        let state = home_state(&["gone", "c2", "e1"]);
        let ids: Vec<String> = favorite_cards(&state).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, ["c2", "e1"]);
    }
}
