//! Catalog loader: the one asynchronous operation of the picker.
//!
//! The loader fetches the icon metadata document once, builds the catalog and
//! search index off the controller's event loop, and reports back with a
//! single response message.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol between controller and loader
//! - `source`: Where the metadata document comes from (HTTP, file, memory)
//! - `handler`: Loader implementation and message processing logic

pub mod handler;
pub mod messages;
pub mod source;

pub use handler::CatalogLoader;
pub use messages::{LoaderMessage, LoaderResponse};
pub use source::{
    parse_catalog, CatalogSource, FileCatalogSource, HttpCatalogSource, StaticCatalogSource,
    DEFAULT_CATALOG_URL,
};
