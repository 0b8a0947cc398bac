//! Loader message types.
//!
//! This module defines the request and response protocol between the
//! controller and the catalog loader. The controller never fetches anything
//! itself: it emits a [`LoaderMessage`] as an action, and whoever runs the
//! loader feeds the resulting [`LoaderResponse`] back in as an event.

use crate::catalog::LoadedCatalog;
use std::sync::Arc;

/// Requests sent from the controller to the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoaderMessage {
    /// Fetch the icon catalog and build its search index.
    LoadCatalog,
}

/// Responses sent from the loader back to the controller.
#[derive(Debug, Clone)]
pub enum LoaderResponse {
    /// The catalog was fetched and indexed.
    CatalogLoaded {
        /// Fully built catalog and index, ready to be swapped in.
        catalog: Arc<LoadedCatalog>,
    },

    /// The fetch or parse failed. The controller stays usable with no results.
    LoadFailed {
        /// Human-readable error message.
        message: String,
    },
}
