//! Wallpaper record model and its closed classification sets.
//!
//! A [`WallpaperRecord`] is created once when the catalog loads and never
//! mutated afterwards. [`Mood`] and [`Category`] are closed enumerations whose
//! display labels take part in search matching, so the labels here are
//! user-observable and must not drift.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::AuraError;

/// Emotional tone a wallpaper is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
    Calm,
    Motivated,
    Night,
    Focus,
}

impl Mood {
    /// All moods in home-screen order.
    pub const ALL: [Self; 4] = [Self::Calm, Self::Motivated, Self::Night, Self::Focus];

    /// Display label, also used for search matching.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Motivated => "Motivated",
            Self::Night => "Night",
            Self::Focus => "Focus",
        }
    }
}

/// Visual family a wallpaper belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Earth Tones")]
    EarthTones,
    Cosmic,
    Spiritual,
    #[serde(rename = "AMOLED")]
    Amoled,
}

impl Category {
    /// All categories in home-screen order.
    pub const ALL: [Self; 4] = [Self::EarthTones, Self::Cosmic, Self::Spiritual, Self::Amoled];

    /// Display label, also used for search matching.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EarthTones => "Earth Tones",
            Self::Cosmic => "Cosmic",
            Self::Spiritual => "Spiritual",
            Self::Amoled => "AMOLED",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lowercases and drops separators so "Earth Tones", "earth-tones" and
/// "EarthTones" compare equal.
fn normalize_token(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Mood {
    type Err = AuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        Self::ALL
            .into_iter()
            .find(|m| normalize_token(m.label()) == wanted)
            .ok_or_else(|| AuraError::Config(format!("unknown mood: {s}")))
    }
}

impl FromStr for Category {
    type Err = AuraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize_token(s);
        Self::ALL
            .into_iter()
            .find(|c| normalize_token(c.label()) == wanted)
            .ok_or_else(|| AuraError::Config(format!("unknown category: {s}")))
    }
}

/// A single wallpaper in the catalog.
///
/// Serialized in camelCase with category and mood as their display labels:
///
/// ```json
/// {
///   "id": "cosmic-1",
///   "imageUrl": "https://example.invalid/cosmic-1.jpg",
///   "title": "Mystic Cosmic 1",
///   "category": "Cosmic",
///   "mood": "Night",
///   "isFeatured": true,
///   "resolution": "4K",
///   "isPremium": false,
///   "keywords": ["stars", "galaxy", "night", "mystic"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallpaperRecord {
    pub id: String,
    pub image_url: String,
    pub title: String,
    pub category: Category,
    pub mood: Mood,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl WallpaperRecord {
    /// Creates a non-featured, non-premium 4K record with no keywords.
    ///
    /// Builder-style setters fill in the rest; mostly useful for tests and
    /// embedded catalogs.
    ///
    /// # Examples
    ///
    /// ```
    /// use aurawalls::{Category, Mood, WallpaperRecord};
    ///
    /// let record = WallpaperRecord::new("a", "Silent Cosmic 1", Category::Cosmic, Mood::Calm)
    ///     .with_keywords(["stars"])
    ///     .featured(true);
    /// assert!(record.is_featured);
    /// assert_eq!(record.keywords, vec!["stars"]);
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: Category,
        mood: Mood,
    ) -> Self {
        Self {
            id: id.into(),
            image_url: String::new(),
            title: title.into(),
            category,
            mood,
            is_featured: false,
            resolution: "4K".to_string(),
            is_premium: false,
            keywords: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    #[must_use]
    pub const fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    #[must_use]
    pub const fn premium(mut self, is_premium: bool) -> Self {
        self.is_premium = is_premium;
        self
    }

    /// File name offered when the wallpaper is downloaded.
    #[must_use]
    pub fn download_file_name(&self) -> String {
        format!("{}.jpg", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_from_label_and_kebab_forms() {
        assert_eq!("Earth Tones".parse::<Category>().unwrap(), Category::EarthTones);
        assert_eq!("earth-tones".parse::<Category>().unwrap(), Category::EarthTones);
        assert_eq!("amoled".parse::<Category>().unwrap(), Category::Amoled);
        assert!("sunset".parse::<Category>().is_err());
    }

    #[test]
    fn mood_parses_case_insensitively() {
        assert_eq!("NIGHT".parse::<Mood>().unwrap(), Mood::Night);
        assert!("sleepy".parse::<Mood>().is_err());
    }

    #[test]
    fn record_deserializes_from_camel_case_with_labels() {
        let json = r#"{
            "id": "earth-tones-3",
            "imageUrl": "https://example.invalid/3.jpg",
            "title": "Golden Earth 3",
            "category": "Earth Tones",
            "mood": "Focus",
            "isFeatured": true,
            "resolution": "8K",
            "isPremium": false,
            "keywords": ["sand", "focus"]
        }"#;

        let record: WallpaperRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::EarthTones);
        assert_eq!(record.mood, Mood::Focus);
        assert!(record.is_featured);
        assert_eq!(record.keywords, vec!["sand", "focus"]);
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{"id":"x","imageUrl":"","title":"X","category":"AMOLED","mood":"Calm"}"#;
        let record: WallpaperRecord = serde_json::from_str(json).unwrap();
        assert!(record.keywords.is_empty());
        assert!(!record.is_premium);
    }

    #[test]
    fn download_file_name_uses_title() {
        let record = WallpaperRecord::new("a", "Deep Cosmic 7", Category::Cosmic, Mood::Night);
        assert_eq!(record.download_file_name(), "Deep Cosmic 7.jpg");
    }
}
