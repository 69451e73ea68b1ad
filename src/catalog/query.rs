//! Read-only catalog queries.
//!
//! Every function here is a pure linear scan over an immutable slice. Results
//! borrow from the input and keep catalog order; there is no ranking. These
//! semantics decide what the user sees on the home and list screens, so they
//! are kept exact rather than clever:
//!
//! - mood/category filters compare by equality
//! - search is a case-insensitive substring test over title, category label,
//!   mood label and keywords, with a blank query matching everything

use super::filter::Filter;
use crate::domain::{Category, Mood, WallpaperRecord};

/// Number of featured records shown on the home feed.
pub const HOME_FEATURED_LIMIT: usize = 20;

/// Returns every record tagged with `mood`, in catalog order.
#[must_use]
pub fn filter_by_mood(catalog: &[WallpaperRecord], mood: Mood) -> Vec<&WallpaperRecord> {
    let _span = tracing::debug_span!("filter_by_mood", total = catalog.len(), mood = %mood).entered();

    let matched: Vec<&WallpaperRecord> = catalog.iter().filter(|w| w.mood == mood).collect();

    tracing::debug!(matched = matched.len(), "mood filter applied");
    matched
}

/// Returns every record in `category`, in catalog order.
#[must_use]
pub fn filter_by_category(
    catalog: &[WallpaperRecord],
    category: Category,
) -> Vec<&WallpaperRecord> {
    let _span =
        tracing::debug_span!("filter_by_category", total = catalog.len(), category = %category)
            .entered();

    let matched: Vec<&WallpaperRecord> =
        catalog.iter().filter(|w| w.category == category).collect();

    tracing::debug!(matched = matched.len(), "category filter applied");
    matched
}

/// Case-insensitive substring search.
///
/// The query is trimmed and lowercased. A record matches when the query is a
/// substring of its lowercased title, category label, mood label, or any
/// keyword. An empty or whitespace-only query returns the whole catalog.
///
/// # Examples
///
/// ```
/// use aurawalls::catalog::search;
/// use aurawalls::{Category, Mood, WallpaperRecord};
///
/// let catalog = vec![
///     WallpaperRecord::new("a", "Silent Cosmic 1", Category::Cosmic, Mood::Calm)
///         .with_keywords(["stars"]),
///     WallpaperRecord::new("b", "Deep Cosmic 2", Category::Cosmic, Mood::Night)
///         .with_keywords(["dark"]),
/// ];
///
/// let ids: Vec<&str> = search(&catalog, "DAR").iter().map(|w| w.id.as_str()).collect();
/// assert_eq!(ids, ["b"]);
/// assert_eq!(search(&catalog, "   ").len(), 2);
/// ```
#[must_use]
pub fn search<'a>(catalog: &'a [WallpaperRecord], query: &str) -> Vec<&'a WallpaperRecord> {
    let needle = query.trim().to_lowercase();

    let _span =
        tracing::debug_span!("search", total = catalog.len(), query_len = needle.len()).entered();

    if needle.is_empty() {
        tracing::debug!("blank query, returning full catalog");
        return catalog.iter().collect();
    }

    let matched: Vec<&WallpaperRecord> = catalog
        .iter()
        .filter(|w| matches_query(w, &needle))
        .collect();

    tracing::debug!(matched = matched.len(), "search applied");
    matched
}

/// Membership predicate behind [`search`]. `needle` must already be lowercased.
fn matches_query(record: &WallpaperRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.category.label().to_lowercase().contains(needle)
        || record.mood.label().to_lowercase().contains(needle)
        || record
            .keywords
            .iter()
            .any(|k| k.to_lowercase().contains(needle))
}

/// Featured records in catalog order, optionally capped at `limit`.
#[must_use]
pub fn featured(catalog: &[WallpaperRecord], limit: Option<usize>) -> Vec<&WallpaperRecord> {
    let iter = catalog.iter().filter(|w| w.is_featured);
    match limit {
        Some(n) => iter.take(n).collect(),
        None => iter.collect(),
    }
}

/// Applies whichever filter is active. [`Filter::None`] returns everything.
#[must_use]
pub fn apply_filter<'a>(catalog: &'a [WallpaperRecord], filter: &Filter) -> Vec<&'a WallpaperRecord> {
    match filter {
        Filter::None => catalog.iter().collect(),
        Filter::ByMood(m) => filter_by_mood(catalog, *m),
        Filter::ByCategory(c) => filter_by_category(catalog, *c),
        Filter::BySearch(q) => search(catalog, q),
    }
}

/// Number of records per category, in [`Category::ALL`] order.
#[must_use]
pub fn count_by_category(catalog: &[WallpaperRecord]) -> Vec<(Category, usize)> {
    Category::ALL
        .into_iter()
        .map(|c| (c, catalog.iter().filter(|w| w.category == c).count()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(records: &[&WallpaperRecord]) -> Vec<String> {
        records.iter().map(|w| w.id.clone()).collect()
    }

    fn two_record_catalog() -> Vec<WallpaperRecord> {
        vec![
            WallpaperRecord::new("a", "Silent Cosmic 1", Category::Cosmic, Mood::Calm)
                .with_keywords(["stars"]),
            WallpaperRecord::new("b", "Deep Cosmic 2", Category::Cosmic, Mood::Night)
                .with_keywords(["dark"]),
        ]
    }

    fn mixed_catalog() -> Vec<WallpaperRecord> {
        vec![
            WallpaperRecord::new("e1", "Golden Earth 1", Category::EarthTones, Mood::Calm)
                .with_keywords(["forest", "calm", "golden"])
                .featured(true),
            WallpaperRecord::new("c1", "Mystic Cosmic 1", Category::Cosmic, Mood::Night)
                .with_keywords(["nebula", "night", "mystic"])
                .featured(true),
            WallpaperRecord::new("s1", "Pure Spiritual 1", Category::Spiritual, Mood::Focus)
                .with_keywords(["zen", "focus", "pure"]),
            WallpaperRecord::new("a1", "Neo AMOLED 1", Category::Amoled, Mood::Motivated)
                .with_keywords(["neon", "motivated", "neo"])
                .featured(true),
            WallpaperRecord::new("c2", "Wild Cosmic 2", Category::Cosmic, Mood::Calm)
                .with_keywords(["galaxy", "calm", "wild"]),
        ]
    }

    #[test]
    fn end_to_end_scenario() {
        let catalog = two_record_catalog();

        assert_eq!(ids(&filter_by_mood(&catalog, Mood::Calm)), ["a"]);
        assert_eq!(ids(&filter_by_category(&catalog, Category::Cosmic)), ["a", "b"]);
        assert_eq!(ids(&search(&catalog, "dar")), ["b"]);
        assert!(search(&catalog, "zzz").is_empty());
    }

    #[test]
    fn mood_filter_partitions_the_catalog_in_order() {
        let catalog = mixed_catalog();
        for mood in Mood::ALL {
            let hits = filter_by_mood(&catalog, mood);
            assert!(hits.iter().all(|w| w.mood == mood));

            let expected: Vec<String> = catalog
                .iter()
                .filter(|w| w.mood == mood)
                .map(|w| w.id.clone())
                .collect();
            assert_eq!(ids(&hits), expected);
        }
    }

    #[test]
    fn category_filter_partitions_the_catalog_in_order() {
        let catalog = mixed_catalog();
        let hits = filter_by_category(&catalog, Category::Cosmic);
        assert_eq!(ids(&hits), ["c1", "c2"]);

        let missed: Vec<&WallpaperRecord> = catalog
            .iter()
            .filter(|w| !hits.iter().any(|h| h.id == w.id))
            .collect();
        assert!(missed.iter().all(|w| w.category != Category::Cosmic));
    }

    #[test]
    fn blank_query_is_identity() {
        let catalog = mixed_catalog();
        let all: Vec<String> = catalog.iter().map(|w| w.id.clone()).collect();
        assert_eq!(ids(&search(&catalog, "")), all);
        assert_eq!(ids(&search(&catalog, " \t ")), all);
    }

    #[test]
    fn search_ignores_case() {
        let catalog = mixed_catalog();
        assert_eq!(ids(&search(&catalog, "NEBULA")), ids(&search(&catalog, "nebula")));
        assert_eq!(ids(&search(&catalog, "NEBULA")), ["c1"]);
    }

    #[test]
    fn search_matches_category_and_mood_labels() {
        let catalog = mixed_catalog();
        assert_eq!(ids(&search(&catalog, "earth tones")), ["e1"]);
        assert_eq!(ids(&search(&catalog, "amoled")), ["a1"]);
        assert_eq!(ids(&search(&catalog, "motiv")), ["a1"]);
    }

    #[test]
    fn search_lowercases_keywords_before_matching() {
        let catalog = vec![WallpaperRecord::new("k", "Plain", Category::Amoled, Mood::Focus)
            .with_keywords(["LineArt"])];
        assert_eq!(ids(&search(&catalog, "lineart")), ["k"]);
    }

    #[test]
    fn search_trims_the_query() {
        let catalog = mixed_catalog();
        assert_eq!(ids(&search(&catalog, "  zen  ")), ["s1"]);
    }

    #[test]
    fn featured_respects_order_and_cap() {
        let catalog = mixed_catalog();
        assert_eq!(ids(&featured(&catalog, None)), ["e1", "c1", "a1"]);
        assert_eq!(ids(&featured(&catalog, Some(2))), ["e1", "c1"]);
        assert!(featured(&catalog, Some(0)).is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_results() {
        let catalog: Vec<WallpaperRecord> = vec![];
        assert!(filter_by_mood(&catalog, Mood::Calm).is_empty());
        assert!(filter_by_category(&catalog, Category::Cosmic).is_empty());
        assert!(search(&catalog, "").is_empty());
        assert!(featured(&catalog, Some(HOME_FEATURED_LIMIT)).is_empty());
    }

    #[test]
    fn apply_filter_dispatches_on_variant() {
        let catalog = mixed_catalog();
        assert_eq!(apply_filter(&catalog, &Filter::None).len(), catalog.len());
        assert_eq!(ids(&apply_filter(&catalog, &Filter::ByMood(Mood::Focus))), ["s1"]);
        assert_eq!(
            ids(&apply_filter(&catalog, &Filter::ByCategory(Category::Amoled))),
            ["a1"]
        );
        assert_eq!(ids(&apply_filter(&catalog, &Filter::search("galaxy"))), ["c2"]);
    }

    #[test]
    fn category_counts_follow_home_order() {
        let counts = count_by_category(&mixed_catalog());
        assert_eq!(
            counts,
            vec![
                (Category::EarthTones, 1),
                (Category::Cosmic, 2),
                (Category::Spiritual, 1),
                (Category::Amoled, 1),
            ]
        );
    }
}
