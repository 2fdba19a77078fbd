//! Runtime application settings
//!
//! Resolved once at startup from CLI arguments, the user config file and
//! built-in defaults, then held as a resource. The highlight flag is the
//! one setting the UI mutates at runtime (the checkbox).

use crate::core::cli::CliArgs;
use crate::core::config_file::ConfigFile;
use crate::ui::theme::ThemeVariant;
use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct FontpeekSettings {
    pub theme: ThemeVariant,
    /// Whether the canonical face name field is highlighted. On by default.
    pub highlight_face_name: bool,
}

impl Default for FontpeekSettings {
    fn default() -> Self {
        Self {
            theme: ThemeVariant::default(),
            highlight_face_name: true,
        }
    }
}

impl FontpeekSettings {
    /// Resolve settings with the usual priority: CLI > config file >
    /// built-in default.
    pub fn resolve(cli_args: &CliArgs) -> Self {
        let config = ConfigFile::load().unwrap_or_default();
        Self {
            theme: cli_args.get_theme_variant(),
            highlight_face_name: config.highlight_face_name.unwrap_or(true),
        }
    }
}
