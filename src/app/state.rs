//! Picker state management and view model computation.
//!
//! This module defines [`PickerState`], the central state container of the
//! picker, along with the search, selection, popup, and catalog-installation
//! operations the event handler drives. It is the single source of truth for
//! all transient UI state.
//!
//! # State Components
//!
//! - **Catalog**: The loaded catalog and index, swapped in whole once loaded
//! - **Results**: Ranked, capped icons for the current query
//! - **Selection**: At most one icon, always a catalog record
//! - **Popup**: Open/closed plus the token of the pending close timer
//!
//! # Example
//!
//! ```rust
//! use mdi_picker::app::PickerState;
//! use mdi_picker::Config;
//!
//! let mut state = PickerState::new(&Config::default());
//! state.search_query = "acc".to_string();
//! state.apply_search();
//! assert!(state.results.is_empty()); // nothing loaded yet
//! ```

use super::modes::{EmptyQueryMode, LoadStatus, PopupState};
use crate::catalog::{LoadedCatalog, Query};
use crate::domain::error::{PickerError, Result};
use crate::domain::Icon;
use crate::ui::viewmodel::{
    DisplayItem, EmptyState, PickerViewModel, SearchBarInfo, TriggerInfo,
};
use crate::Config;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::sync::Arc;
use std::time::Duration;

/// Caption of the trigger button.
const TRIGGER_LABEL: &str = "SELECT ICON";

/// Central picker state container.
#[derive(Debug, Clone)]
pub struct PickerState {
    /// Loaded catalog and search index.
    ///
    /// Starts as [`LoadedCatalog::empty`] and is replaced as a whole when the
    /// loader responds.
    pub catalog: Arc<LoadedCatalog>,

    /// Progress of the catalog load.
    pub load_status: LoadStatus,

    /// Text of the search input.
    pub search_query: String,

    /// Icons matching `search_query`, in ranked order, at most `result_cap`.
    pub results: Vec<Icon>,

    /// Currently selected icon.
    pub selected: Option<Icon>,

    /// Popup visibility.
    pub popup: PopupState,

    /// Token of the armed close timer, if any.
    pub pending_close: Option<u64>,

    /// Behavior of a blank query.
    pub empty_query: EmptyQueryMode,

    /// Maximum number of results surfaced, `None` for no limit.
    pub result_cap: Option<usize>,

    /// Grace window between focus loss and popup close.
    pub close_delay: Duration,

    /// Glyph font stylesheet URL passed through to the view model.
    pub font_url: String,

    next_timer_token: u64,
}

impl PickerState {
    /// Creates an empty, closed picker configured from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            catalog: Arc::new(LoadedCatalog::empty()),
            load_status: LoadStatus::Pending,
            search_query: String::new(),
            results: vec![],
            selected: None,
            popup: PopupState::Closed,
            pending_close: None,
            empty_query: config.empty_query,
            result_cap: config.result_cap,
            close_delay: Duration::from_millis(config.close_delay_ms),
            font_url: config.font_url.clone(),
            next_timer_token: 0,
        }
    }

    /// Returns `true` if the popup is shown.
    #[must_use]
    pub fn popup_visible(&self) -> bool {
        self.popup == PopupState::Open
    }

    /// Recomputes `results` from `search_query` against the current catalog.
    ///
    /// # Rules
    ///
    /// 1. **Blank query**: `[]` or the whole catalog, per `empty_query`.
    ///    The whole catalog is never truncated.
    /// 2. **Otherwise**: prefix search over name, aliases, and tags,
    ///    truncated to `result_cap`
    ///
    /// Before the catalog is loaded every query yields `[]`.
    pub fn apply_search(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search",
            catalog_size = self.catalog.catalog().len(),
            query_len = self.search_query.len(),
        )
        .entered();

        self.results = if self.search_query.trim().is_empty() {
            match self.empty_query {
                EmptyQueryMode::NoResults => vec![],
                EmptyQueryMode::AllIcons => self.catalog.all(None),
            }
        } else {
            let query = Query::parse(&self.search_query);
            self.catalog.search(&query, self.result_cap)
        };

        tracing::debug!(result_count = self.results.len(), "search applied");
    }

    /// Shows the popup and disarms any pending close timer.
    ///
    /// Returns `true` if visibility changed.
    pub fn open_popup(&mut self) -> bool {
        self.pending_close = None;
        let changed = self.popup == PopupState::Closed;
        self.popup = PopupState::Open;
        changed
    }

    /// Hides the popup and disarms any pending close timer.
    ///
    /// Returns `true` if visibility changed.
    pub fn close_popup(&mut self) -> bool {
        self.pending_close = None;
        let changed = self.popup == PopupState::Open;
        self.popup = PopupState::Closed;
        changed
    }

    /// Arms a fresh close timer, replacing any pending one.
    ///
    /// Returns the new token. Tokens increase monotonically, so a token from an
    /// earlier arm can never match again.
    pub fn arm_close_timer(&mut self) -> u64 {
        self.next_timer_token += 1;
        self.pending_close = Some(self.next_timer_token);
        self.next_timer_token
    }

    /// Swaps in a newly loaded catalog and re-runs the current query.
    pub fn install_catalog(&mut self, catalog: Arc<LoadedCatalog>) {
        self.load_status = LoadStatus::Ready {
            icon_count: catalog.catalog().len(),
        };
        self.catalog = catalog;
        self.apply_search();
    }

    /// Makes `icon` the selection and closes the popup.
    ///
    /// The stored value is the catalog's record for `icon.id`, not the caller's
    /// copy.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::UnknownIcon`] if no loaded icon has that id. State
    /// is left untouched in that case.
    pub fn select(&mut self, icon: &Icon) -> Result<Icon> {
        let record = self
            .catalog
            .catalog()
            .get(&icon.id)
            .cloned()
            .ok_or_else(|| PickerError::UnknownIcon(icon.id.clone()))?;

        self.selected = Some(record.clone());
        self.close_popup();
        Ok(record)
    }

    /// Computes the read model handed to the rendering layer.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PickerViewModel {
        let matcher = if self.search_query.trim().is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let display_items = self
            .results
            .iter()
            .map(|icon| self.compute_display_item(icon, matcher.as_ref()))
            .collect();

        PickerViewModel {
            trigger: TriggerInfo {
                label: TRIGGER_LABEL.to_string(),
                selected_name: self.selected.as_ref().map(|icon| icon.name.clone()),
                selected_class: self.selected.as_ref().map(Icon::css_class),
            },
            popup_visible: self.popup_visible(),
            font_url: self.font_url.clone(),
            search_bar: SearchBarInfo {
                query: self.search_query.clone(),
            },
            display_items,
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_display_item(&self, icon: &Icon, matcher: Option<&SkimMatcherV2>) -> DisplayItem {
        let is_selected = self
            .selected
            .as_ref()
            .is_some_and(|selected| selected.id == icon.id);

        DisplayItem {
            id: icon.id.clone(),
            name: icon.name.clone(),
            css_class: icon.css_class(),
            glyph: icon.glyph(),
            is_selected,
            highlight_ranges: matcher
                .map_or_else(Vec::new, |m| self.compute_highlight_ranges(&icon.name, m)),
        }
    }

    /// Computes character index ranges of `text` matched by the query.
    ///
    /// Fuzzy match indices are coalesced into contiguous `(start, end)` runs.
    /// Icons matched only through an alias or tag usually produce no ranges.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let pattern: String = self.search_query.split_whitespace().collect();
        let Some((_score, indices)) = matcher.fuzzy_indices(text, &pattern) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.results.is_empty() {
            return None;
        }

        let (message, subtitle) = match &self.load_status {
            LoadStatus::Pending => (
                "Loading icons".to_string(),
                "The icon catalog is still being fetched".to_string(),
            ),
            LoadStatus::Failed { message } => {
                ("Icon catalog unavailable".to_string(), message.clone())
            }
            LoadStatus::Ready { icon_count } => {
                if self.search_query.trim().is_empty() {
                    (
                        "Type to search icons".to_string(),
                        format!("{icon_count} icons available"),
                    )
                } else {
                    (
                        "No icons match".to_string(),
                        format!("Nothing matches '{}'", self.search_query.trim()),
                    )
                }
            }
        };

        Some(EmptyState { message, subtitle })
    }
}
