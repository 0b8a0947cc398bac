//! Search/selection controller.
//!
//! This module is the application logic layer, sitting between the host (or
//! [`crate::runtime`]) and the catalog/loader layers. It implements the
//! event-driven architecture behind the picker.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Loader Responses / Timers ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Popup, focus, empty-query, and load-status enums
//! - [`state`]: Central picker state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{EmptyQueryMode, FocusTarget, LoadStatus, PopupState};
pub use state::PickerState;
