//! Storage layer for state that survives restarts.
//!
//! # Modules
//!
//! - `backend`: the [`KeyValueStore`] trait
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: in-memory implementation
//! - `favorites`: the favorites set and its (de)serialization

pub mod backend;
pub mod favorites;
pub mod json;
pub mod memory;

pub use backend::KeyValueStore;
pub use favorites::{Favorites, FAVORITES_KEY};
pub use json::JsonFileStore;
pub use memory::MemoryStore;
