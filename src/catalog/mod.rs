//! Catalog store: records, their sources, and the read-only query engine.
//!
//! # Modules
//!
//! - [`filter`]: the mutually exclusive browse [`Filter`]
//! - [`query`]: pure, order-preserving filter and search functions
//! - [`source`]: asynchronous [`CatalogSource`] implementations
//! - [`store`]: the session [`Catalog`] and its load lifecycle
//!
//! # Example
//!
//! ```
//! use aurawalls::catalog::{filter_by_category, Catalog};
//! use aurawalls::{Category, Mood, WallpaperRecord};
//!
//! let catalog = Catalog::from_records(vec![
//!     WallpaperRecord::new("a", "Silent Cosmic 1", Category::Cosmic, Mood::Calm),
//!     WallpaperRecord::new("b", "Deep Cosmic 2", Category::Cosmic, Mood::Night),
//! ]);
//! assert_eq!(filter_by_category(catalog.records(), Category::Cosmic).len(), 2);
//! ```

pub mod filter;
pub mod query;
pub mod source;
pub mod store;

pub use filter::Filter;
pub use query::{
    apply_filter, count_by_category, featured, filter_by_category, filter_by_mood, search,
    HOME_FEATURED_LIMIT,
};
pub use source::{load_with_timeout, CatalogSource, JsonFileSource, StaticSource};
pub use store::{Catalog, LoadState};
