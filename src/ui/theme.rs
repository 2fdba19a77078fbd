//! UI theme
//!
//! Two built-in variants (dark and light) behind a `CurrentTheme`
//! resource, plus the layout constants shared by the panes. Colors live
//! here so the widget code never hardcodes one.

use bevy::prelude::*;

// ============================================================================
// LAYOUT CONSTANTS
// ============================================================================

/// Outer padding of the two main panes
pub const PANE_PADDING: f32 = 16.0;

/// Vertical spacing between info rows
pub const WIDGET_ROW_LEADING: f32 = 8.0;

/// Spacing between a label and its value field
pub const LABEL_VALUE_SPACING: f32 = 2.0;

/// Font size for labels and values
pub const WIDGET_TEXT_FONT_SIZE: f32 = 16.0;

/// Border width for panes, fields and buttons
pub const WIDGET_BORDER_WIDTH: f32 = 2.0;

/// Corner radius for fields and buttons
pub const WIDGET_BORDER_RADIUS: f32 = 4.0;

/// Horizontal padding inside buttons
pub const BUTTON_PADDING: f32 = 10.0;

/// Vertical padding inside buttons and text fields
pub const FIELD_PADDING: f32 = 6.0;

/// Height of one file list entry
pub const LIST_ITEM_HEIGHT: f32 = 26.0;

/// Wheel scroll speed for the file list, pixels per line
pub const SCROLL_LINE_HEIGHT: f32 = 24.0;

// ============================================================================
// THEME VARIANTS
// ============================================================================

/// The available built-in themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a theme name as given on the CLI or in the config file.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn all_names() -> Vec<&'static str> {
        vec!["dark", "light"]
    }
}

/// The active theme, inserted as a resource at startup.
#[derive(Resource, Debug, Clone)]
pub struct CurrentTheme {
    variant: ThemeVariant,
}

impl CurrentTheme {
    pub fn new(variant: ThemeVariant) -> Self {
        Self { variant }
    }

    pub fn variant(&self) -> ThemeVariant {
        self.variant
    }

    fn dark(&self) -> bool {
        self.variant == ThemeVariant::Dark
    }

    /// Window clear color
    pub fn background_color(&self) -> Color {
        if self.dark() {
            Color::srgb(0.11, 0.11, 0.12)
        } else {
            Color::srgb(0.94, 0.94, 0.93)
        }
    }

    /// Pane fill
    pub fn widget_background_color(&self) -> Color {
        if self.dark() {
            Color::srgb(0.15, 0.15, 0.16)
        } else {
            Color::srgb(0.98, 0.98, 0.97)
        }
    }

    /// Pane and field borders
    pub fn widget_border_color(&self) -> Color {
        if self.dark() {
            Color::srgb(0.30, 0.30, 0.32)
        } else {
            Color::srgb(0.70, 0.70, 0.68)
        }
    }

    /// Labels
    pub fn text_primary(&self) -> Color {
        if self.dark() {
            Color::srgb(0.92, 0.92, 0.90)
        } else {
            Color::srgb(0.12, 0.12, 0.12)
        }
    }

    /// Field values and list entries
    pub fn text_secondary(&self) -> Color {
        if self.dark() {
            Color::srgb(0.75, 0.75, 0.73)
        } else {
            Color::srgb(0.25, 0.25, 0.25)
        }
    }

    /// Read-only text field fill
    pub fn field_background(&self) -> Color {
        if self.dark() {
            Color::srgb(0.09, 0.09, 0.10)
        } else {
            Color::srgb(1.0, 1.0, 1.0)
        }
    }

    /// Fill of the canonical face name field when highlighted
    pub fn highlight_color(&self) -> Color {
        if self.dark() {
            Color::srgb(0.16, 0.38, 0.24)
        } else {
            Color::srgb_u8(168, 255, 200)
        }
    }

    pub fn button_regular(&self) -> Color {
        if self.dark() {
            Color::srgb(0.22, 0.22, 0.24)
        } else {
            Color::srgb(0.88, 0.88, 0.87)
        }
    }

    pub fn button_hovered(&self) -> Color {
        if self.dark() {
            Color::srgb(0.28, 0.28, 0.30)
        } else {
            Color::srgb(0.82, 0.82, 0.81)
        }
    }

    pub fn button_pressed(&self) -> Color {
        if self.dark() {
            Color::srgb(0.34, 0.40, 0.52)
        } else {
            Color::srgb(0.70, 0.78, 0.92)
        }
    }

    pub fn button_outline(&self) -> Color {
        self.widget_border_color()
    }

    /// Checkbox tick fill when enabled
    pub fn checkbox_mark(&self) -> Color {
        if self.dark() {
            Color::srgb(0.55, 0.75, 0.60)
        } else {
            Color::srgb(0.20, 0.55, 0.32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(ThemeVariant::parse("Dark"), Some(ThemeVariant::Dark));
        assert_eq!(ThemeVariant::parse("LIGHT"), Some(ThemeVariant::Light));
        assert_eq!(ThemeVariant::parse("strawberry"), None);
    }

    #[test]
    fn every_variant_has_a_name() {
        for name in ThemeVariant::all_names() {
            assert!(ThemeVariant::parse(name).is_some());
        }
    }
}
