//! The single active browse filter.
//!
//! Mood, category and free-text search are mutually exclusive. Modelling them
//! as one enum makes it impossible to hold two at once.

use crate::domain::{Category, Mood};

/// Which subset of the catalog the list screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// No filter: the whole catalog ("All Wallpapers").
    #[default]
    None,
    ByMood(Mood),
    ByCategory(Category),
    /// Free-text query. Never blank; a blank submission becomes [`Filter::None`].
    BySearch(String),
}

impl Filter {
    /// Builds a search filter, collapsing blank queries to [`Filter::None`].
    ///
    /// The stored query is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurawalls::catalog::Filter;
    ///
    /// assert_eq!(Filter::search("  nebula "), Filter::BySearch("nebula".to_string()));
    /// assert_eq!(Filter::search("   "), Filter::None);
    /// ```
    #[must_use]
    pub fn search(query: &str) -> Self {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            Self::None
        } else {
            Self::BySearch(trimmed.to_string())
        }
    }

    #[must_use]
    pub const fn mood(&self) -> Option<Mood> {
        match self {
            Self::ByMood(m) => Some(*m),
            _ => None,
        }
    }

    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        match self {
            Self::ByCategory(c) => Some(*c),
            _ => None,
        }
    }

    /// The active text query, or `""` when the filter is not a search.
    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::BySearch(q) => q,
            _ => "",
        }
    }

    /// Heading shown above filtered results.
    ///
    /// Mood and category use their labels, a search shows the quoted query.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::None => "All Wallpapers".to_string(),
            Self::ByMood(m) => m.label().to_string(),
            Self::ByCategory(c) => c.label().to_string(),
            Self::BySearch(q) => format!("\"{q}\""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_expose_only_the_active_variant() {
        let f = Filter::ByMood(Mood::Calm);
        assert_eq!(f.mood(), Some(Mood::Calm));
        assert_eq!(f.category(), None);
        assert_eq!(f.query(), "");

        let f = Filter::search("dark");
        assert_eq!(f.mood(), None);
        assert_eq!(f.category(), None);
        assert_eq!(f.query(), "dark");
    }

    #[test]
    fn titles() {
        assert_eq!(Filter::None.title(), "All Wallpapers");
        assert_eq!(Filter::ByCategory(Category::EarthTones).title(), "Earth Tones");
        assert_eq!(Filter::ByMood(Mood::Night).title(), "Night");
        assert_eq!(Filter::search("nebula").title(), "\"nebula\"");
    }
}
