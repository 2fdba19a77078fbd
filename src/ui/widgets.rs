//! Shared widget bundles
//!
//! Small bundle constructors so the panes spawn buttons and text with
//! consistent styling.

use crate::ui::theme::*;
use bevy::prelude::*;

/// A themed push button; add a marker component and a text child.
pub fn text_button(theme: &CurrentTheme) -> impl Bundle {
    (
        Button,
        Node {
            padding: UiRect::axes(Val::Px(BUTTON_PADDING), Val::Px(FIELD_PADDING)),
            border: UiRect::all(Val::Px(WIDGET_BORDER_WIDTH)),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(theme.button_regular()),
        BorderColor(theme.button_outline()),
        BorderRadius::all(Val::Px(WIDGET_BORDER_RADIUS)),
    )
}

/// Label text in the primary color.
pub fn label_text(theme: &CurrentTheme, value: &str) -> impl Bundle {
    (
        Text::new(value),
        TextFont {
            font_size: WIDGET_TEXT_FONT_SIZE,
            ..default()
        },
        TextColor(theme.text_primary()),
    )
}

/// Value text in the secondary color.
pub fn value_text(theme: &CurrentTheme, value: &str) -> impl Bundle {
    (
        Text::new(value),
        TextFont {
            font_size: WIDGET_TEXT_FONT_SIZE,
            ..default()
        },
        TextColor(theme.text_secondary()),
    )
}

/// The read-only text field look used by the info pane values.
pub fn field_node(theme: &CurrentTheme) -> impl Bundle {
    (
        Node {
            width: Val::Percent(100.0),
            padding: UiRect::axes(Val::Px(BUTTON_PADDING), Val::Px(FIELD_PADDING)),
            border: UiRect::all(Val::Px(WIDGET_BORDER_WIDTH)),
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(theme.field_background()),
        BorderColor(theme.widget_border_color()),
        BorderRadius::all(Val::Px(WIDGET_BORDER_RADIUS)),
    )
}
