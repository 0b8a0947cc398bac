//! Icon domain model.
//!
//! This module defines the [`Icon`] record as published in the Material Design
//! Icons metadata catalog. Records are immutable once loaded: the picker only
//! ever reads them, looks them up by id, and hands clones to the host.

use crate::domain::error::{PickerError, Result};
use serde::Deserialize;

/// CSS class prefix used by the MDI glyph font stylesheet.
const CSS_CLASS_PREFIX: &str = "mdi mdi-";

/// A single icon entry from the catalog.
///
/// All seven fields are required when deserializing. Additional fields present in
/// the upstream document (`baseIconId`, `styles`, `deprecated`, ...) are ignored.
///
/// # Fields
///
/// - `id`: Unique identifier, the retrieval key of the search index
/// - `name`: Display name, also the suffix of the glyph CSS class
/// - `codepoint`: Hexadecimal Unicode codepoint of the glyph (e.g. `"F01C9"`)
/// - `aliases`: Alternative names, indexed for search
/// - `tags`: Category tags, indexed for search
/// - `author`: Icon author
/// - `version`: Catalog version in which the icon was introduced
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Icon {
    pub id: String,
    pub name: String,
    pub codepoint: String,
    pub aliases: Vec<String>,
    pub tags: Vec<String>,
    pub author: String,
    pub version: String,
}

impl Icon {
    /// Returns the CSS class pair that renders this icon with the MDI font.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mdi_picker::Icon;
    /// let icon = Icon {
    ///     id: "a".into(),
    ///     name: "account".into(),
    ///     codepoint: "F0004".into(),
    ///     aliases: vec![],
    ///     tags: vec![],
    ///     author: "Google".into(),
    ///     version: "1.5.54".into(),
    /// };
    /// assert_eq!(icon.css_class(), "mdi mdi-account");
    /// ```
    #[must_use]
    pub fn css_class(&self) -> String {
        format!("{CSS_CLASS_PREFIX}{}", self.name)
    }

    /// Decodes the hexadecimal codepoint into the glyph character.
    ///
    /// Returns `None` if the codepoint is not valid hex or not a Unicode scalar.
    #[must_use]
    pub fn glyph(&self) -> Option<char> {
        u32::from_str_radix(self.codepoint.trim(), 16)
            .ok()
            .and_then(char::from_u32)
    }

    /// Checks that the record is usable as a catalog entry.
    ///
    /// # Errors
    ///
    /// Returns [`PickerError::InvalidRecord`] if `id` or `name` is blank.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(PickerError::InvalidRecord(format!(
                "icon named '{}' has an empty id",
                self.name
            )));
        }
        if self.name.trim().is_empty() {
            return Err(PickerError::InvalidRecord(format!(
                "icon '{}' has an empty name",
                self.id
            )));
        }
        Ok(())
    }

    /// Iterates over every searchable text value: name, aliases, then tags.
    pub fn searchable_text(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .chain(self.tags.iter().map(String::as_str))
    }
}
