//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where the picker keeps its on-disk artifacts (the log file) and
//! expands user-supplied paths.

pub mod paths;

pub use paths::{default_trace_file, expand_tilde, get_data_dir};
