//! Well-known font directories
//!
//! The "System fonts" button is backed by this provider rather than a
//! platform check in the shell: a platform either knows its font
//! directory or it does not, and adding one is a change here only.

use std::path::PathBuf;

/// The platform's system font directory, if this platform has a single
/// well-known one.
///
/// Only Windows qualifies today; Linux and macOS spread fonts over
/// several directories and would need a multi-root listing to be useful.
pub fn system_font_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        Some(PathBuf::from("C:\\Windows\\Fonts"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_matches_platform() {
        let dir = system_font_dir();
        if cfg!(target_os = "windows") {
            assert_eq!(dir, Some(PathBuf::from("C:\\Windows\\Fonts")));
        } else {
            assert_eq!(dir, None);
        }
    }
}
