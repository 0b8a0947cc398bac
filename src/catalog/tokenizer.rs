//! Text tokenization shared by indexing and querying.
//!
//! Indexed text and query text go through the same pipeline so that a query term
//! is always comparable with an indexed term:
//!
//! 1. Split on whitespace and hyphens (`account-alert` → `account`, `alert`)
//! 2. Trim non-alphanumeric characters from both ends of each piece
//! 3. Lowercase
//! 4. Drop empty pieces
//!
//! No stemming or stop-word removal is applied; icon names are short
//! identifiers where `off`, `on` and `all` are meaningful.

/// Splits `text` into normalized search terms.
///
/// # Examples
///
/// ```
/// use mdi_picker::catalog::tokenize;
///
/// assert_eq!(tokenize("Account-Alert"), vec!["account", "alert"]);
/// assert_eq!(tokenize("Account / User"), vec!["account", "user"]);
/// assert!(tokenize(" -- ").is_empty());
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| c.is_whitespace() || c == '-')
        .map(|piece| piece.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|piece| !piece.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::tokenize;

    #[test]
    fn splits_on_whitespace_and_hyphen() {
        assert_eq!(
            tokenize("battery  charging-wireless"),
            vec!["battery", "charging", "wireless"]
        );
    }

    #[test]
    fn trims_punctuation_but_keeps_inner_characters() {
        assert_eq!(tokenize("(alpha) b.c."), vec!["alpha", "b.c"]);
        assert_eq!(tokenize("ic*"), vec!["ic"]);
    }

    #[test]
    fn lowercases_unicode() {
        assert_eq!(tokenize("ÉCLAIR"), vec!["éclair"]);
    }
}
