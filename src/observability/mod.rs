//! Log file output for `tracing` spans and events.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter (rotating) → aurawalls.log
//! ```
//!
//! # Features
//!
//! - **File output**: `<data_dir>/aurawalls.log`, plain text, no ANSI colors
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`file_writer`]: rotating file writer

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
