//! Application layer: the navigation controller.
//!
//! # Architecture
//!
//! Unidirectional data flow:
//!
//! ```text
//! User input / timers / loads → Event → handle_event → state transition → Actions → runtime
//!                                   ↑                                         │
//!                                   └──────────── outcomes as events ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects returned to the runtime
//! - [`handler`]: event dispatch
//! - [`modes`]: `Screen` and `PreviewMode`
//! - [`navigation`]: the state machine and its transitions
//! - [`state`]: `AppState`, the owned container handed to views
//! - [`timer`]: one-shot timer handles

pub mod actions;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod state;
pub mod timer;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{PreviewMode, Screen};
pub use navigation::NavigationState;
pub use state::{AppState, Settings};
pub use timer::{TimerHandle, DEFAULT_SPLASH_DELAY};
