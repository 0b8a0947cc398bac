//! State machine enums for the picker controller.
//!
//! # Popup State Machine
//!
//! ```text
//!            Open / FocusGained / Search
//!   Closed ───────────────────────────────► Open
//!     ▲                                      │ FocusLost: arm close timer (token n)
//!     │   Select, or CloseTimerElapsed(n)    │ FocusGained before expiry: disarm
//!     └──────────────────────────────────────┘
//! ```
//!
//! The initial state is [`PopupState::Closed`].

use std::str::FromStr;

/// Visibility of the results popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    /// Popup hidden. Initial state.
    #[default]
    Closed,

    /// Popup shown with the search input and result list.
    Open,
}

/// Elements of the picker that can receive focus.
///
/// The host maps its own elements onto these, including a custom input or a
/// custom trigger supplied in place of the defaults. Focus landing on any of
/// them keeps the popup open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// The button that shows the selected icon and opens the popup.
    Trigger,

    /// The search input inside the popup.
    Input,

    /// The result list inside the popup.
    Results,
}

/// What a blank query returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyQueryMode {
    /// A blank query shows no results.
    #[default]
    #[serde(alias = "none")]
    NoResults,

    /// A blank query shows the whole catalog (subject to the result cap).
    #[serde(alias = "all")]
    AllIcons,
}

impl FromStr for EmptyQueryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "empty" | "noresults" => Ok(Self::NoResults),
            "all" | "allicons" => Ok(Self::AllIcons),
            other => Err(format!("unknown empty-query mode '{other}'")),
        }
    }
}

/// Progress of the one-time catalog load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// Fetch in flight; searches return nothing.
    #[default]
    Pending,

    /// Catalog installed.
    Ready {
        /// Number of icons in the installed catalog.
        icon_count: usize,
    },

    /// Fetch failed; the picker keeps working with an empty catalog.
    Failed {
        /// Reason reported by the loader.
        message: String,
    },
}
