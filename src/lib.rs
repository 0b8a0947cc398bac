//! mdi-picker: search-and-select core of a Material Design Icons picker.
//!
//! The crate provides everything of an icon picker except drawing it:
//! - One-time loading of the icon metadata catalog (HTTP, file, or in-memory)
//! - A full-text prefix index over icon names, aliases, and tags
//! - Ranked, capped search results and single-icon selection
//! - A focus-driven popup state machine with a grace delay on focus loss
//! - A view model snapshot for whatever renders the picker
//! - An optional tokio driver that runs the side effects
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host / Runtime driver (runtime/)                   │  ← Event loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Controller (app/)                                  │  ← State machine
//! │  - Event handling                                   │
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Read model    │   │ Catalog       │   │ Loader        │
//! │ (ui/)         │   │ (catalog/)    │   │ (loader/)     │
//! │ - View model  │   │ - Id lookup   │   │ - HTTP fetch  │
//! │               │   │ - Prefix index│   │ - Index build │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) & Infrastructure (infrastructure/)│
//! │  Observability (observability/)                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller state machine with event/action model
//! - [`catalog`]: Catalog map, tokenizer, and search index
//! - [`domain`]: Icon record and error types
//! - [`infrastructure`]: Platform paths
//! - [`loader`]: Catalog sources and the loader
//! - [`runtime`]: Tokio event loop executing controller actions
//! - [`ui`]: View model types
//! - [`observability`]: Tracing subscriber with a rotating log file
//!
//! # Configuration
//!
//! Hosts embedding the picker as an element pass its attributes:
//!
//! ```text
//! <mdi-icon-picker font-url="https://cdn.example/materialdesignicons.min.css"
//!                  empty-query="all" result-cap="100" close-delay="100">
//! ```
//!
//! which map onto [`Config::from_attributes`]. A TOML file works as well, see
//! [`Config::from_file`].
//!
//! # Examples
//!
//! ## Driving the controller by hand
//!
//! ```rust
//! use mdi_picker::{handle_event, initialize, Action, Config, Event};
//! use mdi_picker::loader::LoaderMessage;
//!
//! let (mut state, startup) = initialize(&Config::default());
//! assert_eq!(startup, vec![Action::Load(LoaderMessage::LoadCatalog)]);
//!
//! // Searching before the catalog arrives is fine; it just finds nothing.
//! let (render, _actions) = handle_event(&mut state, &Event::Search { query: "acc".into() })?;
//! assert!(render);
//! assert!(state.results.is_empty());
//! # Ok::<(), mdi_picker::PickerError>(())
//! ```
//!
//! ## With the tokio runtime
//!
//! ```no_run
//! use mdi_picker::{runtime, Config};
//! use mdi_picker::loader::CatalogLoader;
//!
//! # async fn demo() {
//! let config = Config::default();
//! let picker = runtime::spawn(&config, CatalogLoader::from_config(&config));
//! let mut views = picker.subscribe();
//!
//! picker.search("bell");
//! while views.changed().await.is_ok() {
//!     println!("{} results", views.borrow().display_items.len());
//! }
//! # }
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod loader;
pub mod runtime;
pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, EmptyQueryMode, Event, FocusTarget, PickerState, PopupState};
pub use domain::{Icon, PickerError, Result};
pub use ui::PickerViewModel;

use loader::{LoaderMessage, DEFAULT_CATALOG_URL};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Default number of results surfaced to the view.
pub const DEFAULT_RESULT_CAP: usize = 100;

/// Default grace window after focus loss, in milliseconds.
pub const DEFAULT_CLOSE_DELAY_MS: u64 = 100;

/// Picker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// URL of the icon metadata JSON document.
    pub catalog_url: String,

    /// Stylesheet URL providing the `mdi mdi-*` glyph classes.
    ///
    /// Passed through to the view model untouched. Default: empty.
    pub font_url: String,

    /// What a blank query shows. Default: no results.
    pub empty_query: EmptyQueryMode,

    /// Maximum results surfaced per search. `None` disables the cap.
    ///
    /// In TOML, `0` or `"none"` disables it. Default: `Some(100)`.
    #[serde(deserialize_with = "deserialize_result_cap")]
    pub result_cap: Option<usize>,

    /// Grace window between focus loss and popup close. Default: 100.
    pub close_delay_ms: u64,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Default: `mdi-picker.log` in the data directory.
    pub trace_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            font_url: String::new(),
            empty_query: EmptyQueryMode::NoResults,
            result_cap: Some(DEFAULT_RESULT_CAP),
            close_delay_ms: DEFAULT_CLOSE_DELAY_MS,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from element-style attributes.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog-url`, `font-url`, `trace-level`, `trace-file`: taken verbatim
    /// - `empty-query`: `none` or `all` (falls back to `none`)
    /// - `result-cap`: number; `0` or `none` disables the cap (falls back to 100)
    /// - `close-delay`: milliseconds (falls back to 100)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use mdi_picker::{Config, EmptyQueryMode};
    ///
    /// let mut attrs = BTreeMap::new();
    /// attrs.insert("empty-query".to_string(), "all".to_string());
    /// attrs.insert("result-cap".to_string(), "none".to_string());
    ///
    /// let config = Config::from_attributes(&attrs);
    /// assert_eq!(config.empty_query, EmptyQueryMode::AllIcons);
    /// assert_eq!(config.result_cap, None);
    /// ```
    #[must_use]
    pub fn from_attributes(attributes: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let non_empty = |key: &str| {
            attributes
                .get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let empty_query = non_empty("empty-query")
            .and_then(|value| {
                value
                    .parse::<EmptyQueryMode>()
                    .map_err(|e| tracing::debug!(error = %e, "ignoring empty-query attribute"))
                    .ok()
            })
            .unwrap_or(defaults.empty_query);

        let result_cap = non_empty("result-cap")
            .and_then(|value| parse_result_cap(&value))
            .unwrap_or(defaults.result_cap);

        let close_delay_ms = non_empty("close-delay")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(defaults.close_delay_ms);

        Self {
            catalog_url: non_empty("catalog-url").unwrap_or(defaults.catalog_url),
            font_url: non_empty("font-url").unwrap_or(defaults.font_url),
            empty_query,
            result_cap,
            close_delay_ms,
            trace_level: non_empty("trace-level"),
            trace_file: non_empty("trace-file"),
        }
    }

    /// Parses configuration from TOML text. Missing keys take default values.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Config`] if the TOML is malformed or a value has the
    /// wrong type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mdi_picker::{Config, EmptyQueryMode};
    ///
    /// let config = Config::from_toml_str(r#"
    ///     empty_query = "all"
    ///     close_delay_ms = 250
    /// "#)?;
    /// assert_eq!(config.empty_query, EmptyQueryMode::AllIcons);
    /// assert_eq!(config.close_delay_ms, 250);
    /// assert_eq!(config.result_cap, Some(100));
    /// # Ok::<(), mdi_picker::PickerError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| PickerError::Config(format!("failed to parse config TOML: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::Config`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PickerError::Config(format!("failed to read config file {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }
}

/// Reads a result cap written as a count or `none`; `0` also means no cap.
///
/// Returns `None` if `value` is neither.
fn parse_result_cap(value: &str) -> Option<Option<usize>> {
    if value.eq_ignore_ascii_case("none") {
        return Some(None);
    }
    match value.parse::<usize>() {
        Ok(0) => Some(None),
        Ok(cap) => Some(Some(cap)),
        Err(_) => None,
    }
}

fn deserialize_result_cap<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCap {
        Count(usize),
        Text(String),
    }

    match RawCap::deserialize(deserializer)? {
        RawCap::Count(0) => Ok(None),
        RawCap::Count(cap) => Ok(Some(cap)),
        RawCap::Text(text) => parse_result_cap(text.trim()).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid result_cap {text:?}, expected a count or \"none\""
            ))
        }),
    }
}

/// Creates the picker state and the startup actions.
///
/// The returned actions contain the single catalog load request; it must be
/// executed exactly once.
///
/// # Example
///
/// ```rust
/// use mdi_picker::{initialize, Config};
///
/// let (state, actions) = initialize(&Config::default());
/// assert!(!state.popup_visible());
/// assert_eq!(actions.len(), 1);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> (PickerState, Vec<Action>) {
    tracing::debug!(
        catalog_url = %config.catalog_url,
        empty_query = ?config.empty_query,
        result_cap = ?config.result_cap,
        "initializing icon picker"
    );

    (
        PickerState::new(config),
        vec![Action::Load(LoaderMessage::LoadCatalog)],
    )
}
