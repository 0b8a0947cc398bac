//! Read model for the rendering layer.
//!
//! The picker does not draw anything itself. It exposes
//! [`PickerViewModel`](viewmodel::PickerViewModel) snapshots, computed by
//! [`PickerState::compute_viewmodel`](crate::app::PickerState::compute_viewmodel),
//! which any view layer can turn into markup or widgets.

pub mod viewmodel;

pub use viewmodel::{DisplayItem, EmptyState, PickerViewModel, SearchBarInfo, TriggerInfo};
