//! View model types representing renderable picker state.
//!
//! View models are immutable snapshots computed from
//! [`PickerState`](crate::app::PickerState) and handed to whatever renders the
//! picker (a web view, a native toolkit, a terminal UI). They contain no
//! business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use mdi_picker::ui::viewmodel::{PickerViewModel, SearchBarInfo, TriggerInfo};
//!
//! let vm = PickerViewModel {
//!     trigger: TriggerInfo {
//!         label: "SELECT ICON".to_string(),
//!         selected_name: None,
//!         selected_class: None,
//!     },
//!     popup_visible: false,
//!     font_url: String::new(),
//!     search_bar: SearchBarInfo { query: String::new() },
//!     display_items: vec![],
//!     empty_state: None,
//! };
//! assert!(!vm.popup_visible);
//! ```

/// Complete picker view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerViewModel {
    /// The button showing the current selection.
    pub trigger: TriggerInfo,

    /// Whether the results popup should be shown.
    pub popup_visible: bool,

    /// Stylesheet URL providing the glyph font classes.
    pub font_url: String,

    /// Search input contents.
    pub search_bar: SearchBarInfo,

    /// Result grid entries in ranked order.
    pub display_items: Vec<DisplayItem>,

    /// Placeholder shown instead of results, if any.
    pub empty_state: Option<EmptyState>,
}

/// Trigger button display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerInfo {
    /// Button caption.
    pub label: String,

    /// Name of the selected icon.
    pub selected_name: Option<String>,

    /// CSS class pair rendering the selected icon (`mdi mdi-<name>`).
    pub selected_class: Option<String>,
}

/// Display information for a single result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Icon id, passed back when the item is clicked.
    pub id: String,

    /// Icon name.
    pub name: String,

    /// CSS class pair for the glyph font.
    pub css_class: String,

    /// Decoded glyph, for renderers that draw the font directly.
    pub glyph: Option<char>,

    /// Whether this icon is the current selection.
    pub is_selected: bool,

    /// Character ranges of `name` matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No icons match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search input display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
