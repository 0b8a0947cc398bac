//! Catalog sources.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where the
//! icon metadata document comes from. The loader only needs one operation from
//! a source: produce the list of icon records once.
//!
//! # Implementations
//!
//! - [`HttpCatalogSource`]: One HTTP GET against the configured URL (default)
//! - [`FileCatalogSource`]: A local copy of the metadata document
//! - [`StaticCatalogSource`]: Records already in memory

use crate::domain::error::{PickerError, Result};
use crate::domain::Icon;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::path::PathBuf;

/// Public URL of the Material Design Icons metadata document.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/Templarian/MaterialDesign/master/meta.json";

/// Abstraction over catalog document origins.
///
/// # Examples
///
/// ```
/// use mdi_picker::loader::{CatalogSource, StaticCatalogSource};
///
/// let source = StaticCatalogSource::new(vec![]);
/// assert_eq!(source.describe(), "static catalog (0 icons)");
/// ```
pub trait CatalogSource: Send + Sync {
    /// Short description used in log messages.
    fn describe(&self) -> String;

    /// Retrieves every icon record.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be retrieved or is not a JSON
    /// array of icon records.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Icon>>>;
}

/// Parses a metadata document into icon records.
///
/// This is the validation boundary for fetched data: the body must be a JSON
/// array and every element must carry all seven icon fields.
///
/// # Errors
///
/// Returns [`PickerError::Json`] if the document does not have that shape.
///
/// # Examples
///
/// ```
/// use mdi_picker::loader::parse_catalog;
///
/// let icons = parse_catalog(r#"[{"id":"a","name":"account","codepoint":"F0004",
///     "aliases":[],"tags":[],"author":"Google","version":"1.5.54"}]"#)?;
/// assert_eq!(icons.len(), 1);
/// assert!(parse_catalog("{}").is_err());
/// # Ok::<(), mdi_picker::PickerError>(())
/// ```
pub fn parse_catalog(body: &str) -> Result<Vec<Icon>> {
    let icons: Vec<Icon> = serde_json::from_str(body)?;
    tracing::debug!(records = icons.len(), "catalog document parsed");
    Ok(icons)
}

/// Fetches the catalog with a single HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    /// Creates a source for `url` with a default HTTP client.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), url)
    }

    /// Creates a source for `url` reusing an existing HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// The URL this source requests.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CatalogSource for HttpCatalogSource {
    fn describe(&self) -> String {
        format!("http catalog {}", self.url)
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Icon>>> {
        async move {
            tracing::debug!(url = %self.url, "requesting icon catalog");

            let response = self.client.get(&self.url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(PickerError::HttpStatus {
                    status: status.as_u16(),
                    url: self.url.clone(),
                });
            }

            let body = response.text().await?;
            tracing::debug!(bytes = body.len(), "catalog response received");
            parse_catalog(&body)
        }
        .boxed()
    }
}

/// Reads the catalog from a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalogSource {
    fn describe(&self) -> String {
        format!("file catalog {}", self.path.display())
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Icon>>> {
        async move {
            let body = tokio::fs::read_to_string(&self.path).await?;
            parse_catalog(&body)
        }
        .boxed()
    }
}

/// Serves a fixed set of records held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    icons: Vec<Icon>,
}

impl StaticCatalogSource {
    #[must_use]
    pub const fn new(icons: Vec<Icon>) -> Self {
        Self { icons }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn describe(&self) -> String {
        format!("static catalog ({} icons)", self.icons.len())
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Icon>>> {
        futures_util::future::ready(Ok(self.icons.clone())).boxed()
    }
}
