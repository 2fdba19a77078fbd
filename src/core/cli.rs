//! Command line interface for Fontpeek
//!
//! Handles parsing command line arguments and provides validation for
//! user inputs before the window opens.

use crate::core::config_file::ConfigFile;
use crate::ui::theme::ThemeVariant;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Fontpeek CLI arguments
///
/// Examples:
///   fontpeek                          # Start with an empty list
///   fontpeek --open MyFont.ttf        # Show one font on startup
///   fontpeek --open ~/fonts           # List a folder on startup
///   fontpeek --theme light            # Use the light theme
#[derive(Parser, Debug, Resource, Clone)]
#[clap(
    name = "fontpeek",
    version,
    about = "A quick font metadata viewer built with Rust and Bevy",
    long_about = "Fontpeek shows the naming-table metadata of TTF, OTF, TTC and OTC files: family, subfamily, weight class, full name, version and PostScript name, with one-click copying of the canonical face name."
)]
pub struct CliArgs {
    /// Font file or folder to show on startup
    #[clap(
        long = "open",
        short = 'o',
        help = "Font file or folder to open on startup",
        long_help = "Path to open on startup. A font file (.ttf, .otf, .ttc, .otc) is shown directly; a folder is listed the same way the Open folder button would list it."
    )]
    pub open: Option<PathBuf>,

    /// Theme to use for the interface
    #[clap(
        long = "theme",
        short = 't',
        help = "Theme to use",
        long_help = "Theme to use for the interface. Available themes: dark (default), light"
    )]
    pub theme: Option<String>,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures paths exist and the theme name is known before the
    /// application starts, with clear messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.open {
            if !path.exists() {
                return Err(format!(
                    "Path does not exist: {}\nMake sure the path is correct.",
                    path.display()
                ));
            }
            if path.is_file()
                && !path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .map(crate::io::browse::has_font_extension)
                    .unwrap_or(false)
            {
                return Err(format!(
                    "Not a recognized font file: {}\nExpected a .ttf, .otf, .ttc or .otc file, or a folder.",
                    path.display()
                ));
            }
        }

        if let Some(theme_name) = &self.theme {
            if ThemeVariant::parse(theme_name).is_none() {
                let available = ThemeVariant::all_names().join(", ");
                return Err(format!(
                    "Unknown theme: '{theme_name}'\nAvailable themes: {available}"
                ));
            }
        }

        Ok(())
    }

    /// Get the theme variant from CLI args, config file, or default
    ///
    /// Priority order:
    /// 1. CLI argument (--theme)
    /// 2. Config file setting (~/.config/fontpeek/settings.json)
    /// 3. Built-in default (dark theme)
    pub fn get_theme_variant(&self) -> ThemeVariant {
        if let Some(theme_name) = &self.theme {
            if let Some(variant) = ThemeVariant::parse(theme_name) {
                debug!("Using theme from CLI: {}", theme_name);
                return variant;
            }
        }

        if let Some(config) = ConfigFile::load() {
            if let Some(theme_name) = config.default_theme {
                if let Some(variant) = ThemeVariant::parse(&theme_name) {
                    debug!("Using theme from config file: {}", theme_name);
                    return variant;
                }
            }
        }

        debug!("Using default theme: dark");
        ThemeVariant::default()
    }
}
