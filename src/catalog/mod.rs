//! Icon catalog and its derived search index.
//!
//! The catalog is the id → [`Icon`] mapping built from the fetched metadata
//! document. The [`SearchIndex`] is derived from it. Both are bundled into a
//! [`LoadedCatalog`], which is built completely before the controller ever sees
//! it and is then swapped in as a whole, so a half-built index is never observed.
//!
//! # Modules
//!
//! - `tokenizer`: Text normalization shared by indexing and querying
//! - `index`: Inverted index, query parsing, BM25 ranking

mod index;
mod tokenizer;

pub use index::{Field, Query, SearchHit, SearchIndex};
pub use tokenizer::tokenize;

use crate::domain::Icon;
use std::collections::HashMap;

/// Identifier → icon mapping preserving source order.
///
/// Invalid records are skipped. A duplicate id replaces the earlier record in
/// place, so the catalog holds one record per id at the position the id was
/// first seen.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    icons: Vec<Icon>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from source records.
    #[must_use]
    pub fn from_icons(icons: Vec<Icon>) -> Self {
        let mut catalog = Self::default();
        let mut skipped = 0_usize;
        let mut replaced = 0_usize;

        for icon in icons {
            if let Err(e) = icon.validate() {
                tracing::warn!(error = %e, "skipping invalid icon record");
                skipped += 1;
                continue;
            }

            if let Some(&position) = catalog.positions.get(&icon.id) {
                catalog.icons[position] = icon;
                replaced += 1;
            } else {
                catalog.positions.insert(icon.id.clone(), catalog.icons.len());
                catalog.icons.push(icon);
            }
        }

        tracing::debug!(
            icons = catalog.icons.len(),
            skipped = skipped,
            replaced = replaced,
            "catalog built"
        );

        catalog
    }

    /// Looks up an icon by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Icon> {
        self.positions.get(id).map(|&position| &self.icons[position])
    }

    /// Returns `true` if an icon with this id is loaded.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Iterates over icons in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Icon> {
        self.icons.iter()
    }

    /// Number of icons in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns `true` if the catalog holds no icons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// A catalog together with the index built from it.
///
/// Constructed in one step by [`LoadedCatalog::build`]; never mutated afterward.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    catalog: Catalog,
    index: SearchIndex,
    loaded_at: Option<i64>,
}

impl LoadedCatalog {
    /// The state before any catalog has been loaded: nothing matches.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the catalog and its search index from source records.
    ///
    /// # Example
    ///
    /// ```rust
    /// use mdi_picker::catalog::LoadedCatalog;
    ///
    /// let loaded = LoadedCatalog::build(vec![]);
    /// assert!(loaded.catalog().is_empty());
    /// assert!(loaded.loaded_at().is_some());
    /// ```
    #[must_use]
    pub fn build(icons: Vec<Icon>) -> Self {
        let catalog = Catalog::from_icons(icons);
        let index = SearchIndex::build(&catalog);
        Self {
            catalog,
            index,
            loaded_at: Some(chrono::Utc::now().timestamp()),
        }
    }

    /// The id → icon mapping.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The derived search index.
    #[must_use]
    pub const fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Unix timestamp of the build, `None` for [`LoadedCatalog::empty`].
    #[must_use]
    pub const fn loaded_at(&self) -> Option<i64> {
        self.loaded_at
    }

    /// Runs `query` and resolves each hit back to its catalog record.
    ///
    /// Results are in ranked order and truncated to `cap` when one is given.
    #[must_use]
    pub fn search(&self, query: &Query, cap: Option<usize>) -> Vec<Icon> {
        let limit = cap.unwrap_or(usize::MAX);
        self.index
            .search(query)
            .into_iter()
            .filter_map(|hit| self.catalog.get(hit.id))
            .take(limit)
            .cloned()
            .collect()
    }

    /// Returns the whole catalog in source order, truncated to `cap`.
    #[must_use]
    pub fn all(&self, cap: Option<usize>) -> Vec<Icon> {
        let limit = cap.unwrap_or(usize::MAX);
        self.catalog.iter().take(limit).cloned().collect()
    }
}
