//! Path helpers for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Returns the plugin data directory (span logs).
///
/// ```rust
/// use profiledeck::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("zellij/profiledeck"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("profiledeck")
}

/// Maps a user-supplied `~` path onto the sandbox `/host` mount.
///
/// Used for the `theme_file` option. Other paths are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
