//! Structured logging with a rotating log file.
//!
//! `tracing` events and spans emitted across the crate are formatted by a
//! `tracing-subscriber` fmt layer and written to a size-rotated file:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → mdi-picker.log (+3 backups)
//! ```
//!
//! # Configuration
//!
//! The filter directive comes from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! The file is `trace_file` from the config, or `mdi-picker.log` in
//! [`get_data_dir`](crate::infrastructure::get_data_dir).
//!
//! # Usage
//!
//! ```rust,no_run
//! use mdi_picker::observability::init_tracing;
//! use mdi_picker::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("picker initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
