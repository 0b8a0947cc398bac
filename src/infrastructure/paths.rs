//! Path utilities for the picker's on-disk artifacts.

use std::path::PathBuf;

/// Application directory name under the platform data directory.
const APP_DIR: &str = "mdi-picker";

/// Default log file name.
const TRACE_FILE_NAME: &str = "mdi-picker.log";

/// Returns the data directory for picker artifacts.
///
/// Resolves to `<data_local_dir>/mdi-picker`, e.g.
/// `~/.local/share/mdi-picker` on Linux. Falls back to the system temp
/// directory when the platform has no data directory.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Returns the default log file path inside [`get_data_dir`].
#[must_use]
pub fn default_trace_file() -> PathBuf {
    get_data_dir().join(TRACE_FILE_NAME)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when no home directory is
/// known, are returned unchanged.
///
/// # Examples
///
/// ```
/// use mdi_picker::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), std::path::PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}
