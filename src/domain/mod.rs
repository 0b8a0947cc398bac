//! Domain layer for the icon picker.
//!
//! Core value types independent of transport, runtime, or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`icon`]: Icon record as published by the metadata catalog

pub mod error;
pub mod icon;

pub use error::{PickerError, Result};
pub use icon::Icon;
