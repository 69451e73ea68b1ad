//! Plain-text rendering of screen views.
//!
//! Used by the shell binary. Output is line oriented with no escape codes so it
//! reads the same in a terminal, a pipe, or a test buffer.

use crate::ui::viewmodel::{
    DetailsView, EmptyState, HomeView, ListView, ScreenView, SplashView, WallpaperCard,
};
use std::io::{self, Write};

/// Writes `view` to `out`.
///
/// # Errors
///
/// Propagates write errors from `out`.
///
/// # Example
///
/// ```rust
/// use aurawalls::app::{AppState, Settings};
/// use aurawalls::storage::Favorites;
/// use aurawalls::ui::{compute_view, render_text};
///
/// let state = AppState::new(Favorites::default(), Settings::default());
/// let mut buf = Vec::new();
/// render_text(&compute_view(&state), &mut buf)?;
/// assert!(String::from_utf8(buf).unwrap().contains("AuraWalls"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_text<W: Write>(view: &ScreenView, out: &mut W) -> io::Result<()> {
    match view {
        ScreenView::Splash(splash) => render_splash(splash, out),
        ScreenView::Home(home) => render_home(home, out),
        ScreenView::List(list) => render_list(list, out),
        ScreenView::Details(details) => render_details(details, out),
    }
}

fn render_splash<W: Write>(splash: &SplashView, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", splash.app_name)?;
    writeln!(out, "{}", splash.tagline.to_uppercase())?;
    writeln!(out, "(press enter or type 'skip')")
}

fn render_home<W: Write>(home: &HomeView, out: &mut W) -> io::Result<()> {
    let theme = if home.dark_mode { "dark" } else { "light" };
    writeln!(out, "== Discover ({theme}) ==")?;

    if let Some(empty) = &home.empty_state {
        return render_empty(empty, out);
    }

    writeln!(out, "Today's Picks:")?;
    if home.loading {
        writeln!(out, "  loading...")?;
    } else {
        for card in &home.featured {
            render_card(card, out)?;
        }
    }

    if !home.favorites.is_empty() {
        writeln!(out, "Favorites:")?;
        for card in &home.favorites {
            render_card(card, out)?;
        }
    }

    let moods: Vec<&str> = home.moods.iter().map(|m| m.label()).collect();
    writeln!(out, "Select Mood: {}", moods.join(" | "))?;

    writeln!(out, "Categories:")?;
    for (category, count) in &home.categories {
        writeln!(out, "  {category} ({count} items)")?;
    }
    Ok(())
}

fn render_list<W: Write>(list: &ListView, out: &mut W) -> io::Result<()> {
    writeln!(out, "== {} ==", list.title)?;

    if list.loading {
        return writeln!(out, "  loading...");
    }
    if let Some(empty) = &list.empty_state {
        return render_empty(empty, out);
    }

    writeln!(out, "{}", list.count_label)?;
    for card in &list.items {
        render_card(card, out)?;
    }
    Ok(())
}

fn render_details<W: Write>(details: &DetailsView, out: &mut W) -> io::Result<()> {
    let card = &details.card;
    let heart = if card.is_favorite { "♥" } else { "♡" };
    writeln!(out, "== {} {heart} ==", card.title)?;
    writeln!(out, "{} · {} · {}", card.category, details.mood, card.resolution)?;
    if let Some(badge) = &card.badge {
        writeln!(out, "[{badge}]")?;
    }
    writeln!(out, "Tags: {}", details.keywords.join(", "))?;
    writeln!(out, "Preview: {}", details.preview_mode.label())
}

fn render_card<W: Write>(card: &WallpaperCard, out: &mut W) -> io::Result<()> {
    let heart = if card.is_favorite { " ♥" } else { "" };
    let badge = card
        .badge
        .as_ref()
        .map_or_else(String::new, |b| format!(" [{b}]"));
    writeln!(
        out,
        "  {:<16} {} ({}, {}){badge}{heart}",
        card.id, card.title, card.category, card.resolution
    )
}

fn render_empty<W: Write>(empty: &EmptyState, out: &mut W) -> io::Result<()> {
    writeln!(out, "  {}", empty.message)?;
    writeln!(out, "  {}", empty.subtitle)
}
