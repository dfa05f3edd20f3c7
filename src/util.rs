//! Path helpers for the iBooks container directories.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Resolves a leading `~` component against `$HOME`.
///
/// ```
/// use ibooks_highlights::util::expand_home;
///
/// assert_eq!(expand_home("/tmp"), std::path::PathBuf::from("/tmp"));
/// ```
pub fn expand_home(path: &str) -> PathBuf {
    expand_home_with(path, std::env::var_os("HOME").as_deref())
}

/// Like [`expand_home`], with the home directory passed in. Without a home
/// directory the path is returned as written.
pub fn expand_home_with(path: &str, home: Option<&OsStr>) -> PathBuf {
    let raw = Path::new(path);
    let Some(home) = home else {
        return raw.to_path_buf();
    };
    match raw.strip_prefix("~") {
        Ok(rest) => Path::new(home).join(rest),
        Err(_) => raw.to_path_buf(),
    }
}
