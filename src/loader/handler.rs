//! Catalog loader implementation.
//!
//! The loader turns a [`LoaderMessage`] into a [`LoaderResponse`]. It owns the
//! [`CatalogSource`], performs the fetch, and builds the complete
//! [`LoadedCatalog`] before answering, so the controller only ever receives a
//! ready-to-swap catalog or a failure description.

use crate::catalog::LoadedCatalog;
use crate::domain::error::Result;
use crate::domain::Icon;
use crate::loader::source::{CatalogSource, HttpCatalogSource};
use crate::loader::{LoaderMessage, LoaderResponse};
use crate::Config;
use std::sync::Arc;
use tracing::Instrument;

/// Fetches and indexes the icon catalog.
///
/// Cheap to clone; clones share the same source.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
}

impl CatalogLoader {
    /// Creates a loader over `source`.
    #[must_use]
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Creates a loader that fetches `config.catalog_url` over HTTP.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(HttpCatalogSource::new(config.catalog_url.clone()))
    }

    /// Helper for turning fetch results into responses with consistent logging.
    ///
    /// Failures are logged at error level and reported as
    /// [`LoaderResponse::LoadFailed`]; they never propagate further.
    fn handle_result<T, F>(
        &self,
        operation: &str,
        result: Result<T>,
        on_success: F,
    ) -> LoaderResponse
    where
        F: FnOnce(T) -> LoaderResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "loader operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::error!(
                    operation = operation,
                    source = %self.source.describe(),
                    error = %e,
                    "loader operation failed"
                );
                LoaderResponse::LoadFailed {
                    message: format!("{operation}: {e}"),
                }
            }
        }
    }

    /// Handles the `LoadCatalog` message.
    async fn handle_load_catalog(&self) -> LoaderResponse {
        let result = self.source.fetch().await;

        self.handle_result("load catalog", result, |icons: Vec<Icon>| {
            let catalog = LoadedCatalog::build(icons);
            tracing::info!(
                icons = catalog.catalog().len(),
                source = %self.source.describe(),
                "icon catalog loaded"
            );
            LoaderResponse::CatalogLoaded {
                catalog: Arc::new(catalog),
            }
        })
    }

    /// Processes a loader message and returns the response.
    pub async fn handle_message(&self, message: LoaderMessage) -> LoaderResponse {
        let span = tracing::debug_span!("loader_handle_message", message_type = ?message);

        async move {
            match message {
                LoaderMessage::LoadCatalog => self.handle_load_catalog().await,
            }
        }
        .instrument(span)
        .await
    }
}

impl std::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("source", &self.source.describe())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PickerError;
    use crate::loader::StaticCatalogSource;
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;

    struct FailingSource;

    impl CatalogSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn fetch(&self) -> BoxFuture<'_, Result<Vec<Icon>>> {
            futures_util::future::ready(Err(PickerError::HttpStatus {
                status: 503,
                url: "http://example.invalid/meta.json".to_string(),
            }))
            .boxed()
        }
    }

    fn icon(id: &str, name: &str) -> Icon {
        Icon {
            id: id.to_string(),
            name: name.to_string(),
            codepoint: "F0001".to_string(),
            aliases: vec![],
            tags: vec![],
            author: "Test".to_string(),
            version: "1.0.0".to_string(),
        }
    }

    #[tokio::test]
    async fn load_catalog_builds_index() {
        let loader = CatalogLoader::new(StaticCatalogSource::new(vec![
            icon("a", "account"),
            icon("c", "bell"),
        ]));

        match loader.handle_message(LoaderMessage::LoadCatalog).await {
            LoaderResponse::CatalogLoaded { catalog } => {
                assert_eq!(catalog.catalog().len(), 2);
                assert_eq!(catalog.index().len(), 2);
            }
            LoaderResponse::LoadFailed { message } => panic!("unexpected failure: {message}"),
        }
    }

    #[tokio::test]
    async fn fetch_failure_becomes_load_failed() {
        let loader = CatalogLoader::new(FailingSource);

        match loader.handle_message(LoaderMessage::LoadCatalog).await {
            LoaderResponse::LoadFailed { message } => assert!(message.contains("503")),
            LoaderResponse::CatalogLoaded { .. } => panic!("failure must not load a catalog"),
        }
    }
}
