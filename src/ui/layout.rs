//! Startup layout
//!
//! Spawns the whole widget tree once at startup. The tree is static;
//! only the file list entries and the member buttons are rebuilt at
//! runtime, both into containers spawned here.

use crate::core::settings::FontpeekSettings;
use crate::io::font_dirs;
use crate::ui::controls::{
    CurrentPathLabel, OpenFileButton, OpenFolderButton, SystemFontsButton,
};
use crate::ui::file_list::FileListContainer;
use crate::ui::info_pane::{
    CopyNameButton, HighlightCheckbox, HighlightCheckboxMark, InfoField, InfoValueText,
    MemberButtonContainer, MemberRow,
};
use crate::ui::theme::*;
use crate::ui::widgets;
use bevy::prelude::*;

pub fn spawn_layout(
    mut commands: Commands,
    theme: Res<CurrentTheme>,
    settings: Res<FontpeekSettings>,
) {
    commands.spawn(Camera2d);

    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            flex_direction: FlexDirection::Column,
            padding: UiRect::all(Val::Px(PANE_PADDING)),
            row_gap: Val::Px(WIDGET_ROW_LEADING),
            ..default()
        })
        .with_children(|root| {
            spawn_main_row(root, &theme, &settings);
            spawn_controls_row(root, &theme);
        });
}

fn spawn_main_row(
    root: &mut ChildSpawnerCommands,
    theme: &CurrentTheme,
    settings: &FontpeekSettings,
) {
    root.spawn(Node {
        flex_grow: 1.0,
        flex_basis: Val::Px(0.0),
        column_gap: Val::Px(WIDGET_ROW_LEADING),
        ..default()
    })
    .with_children(|row| {
        spawn_file_pane(row, theme);
        spawn_info_pane(row, theme, settings);
    });
}

/// Left pane: the scrollable file list.
fn spawn_file_pane(row: &mut ChildSpawnerCommands, theme: &CurrentTheme) {
    row.spawn((
        Node {
            flex_grow: 1.0,
            flex_basis: Val::Px(0.0),
            flex_direction: FlexDirection::Column,
            padding: UiRect::all(Val::Px(FIELD_PADDING)),
            row_gap: Val::Px(LABEL_VALUE_SPACING),
            border: UiRect::all(Val::Px(WIDGET_BORDER_WIDTH)),
            overflow: Overflow::scroll_y(),
            ..default()
        },
        BackgroundColor(theme.widget_background_color()),
        BorderColor(theme.widget_border_color()),
        BorderRadius::all(Val::Px(WIDGET_BORDER_RADIUS)),
        ScrollPosition::default(),
        FileListContainer,
    ));
}

/// Right pane: member selector, the six fields, the highlight toggle and
/// the copy button.
fn spawn_info_pane(
    row: &mut ChildSpawnerCommands,
    theme: &CurrentTheme,
    settings: &FontpeekSettings,
) {
    row.spawn((
        Node {
            flex_grow: 2.0,
            flex_basis: Val::Px(0.0),
            flex_direction: FlexDirection::Column,
            padding: UiRect::all(Val::Px(PANE_PADDING)),
            row_gap: Val::Px(WIDGET_ROW_LEADING),
            border: UiRect::all(Val::Px(WIDGET_BORDER_WIDTH)),
            ..default()
        },
        BackgroundColor(theme.widget_background_color()),
        BorderColor(theme.widget_border_color()),
        BorderRadius::all(Val::Px(WIDGET_BORDER_RADIUS)),
    ))
    .with_children(|pane| {
        spawn_member_row(pane, theme);
        for field in InfoField::ALL {
            spawn_field(pane, theme, field);
        }
        spawn_highlight_checkbox(pane, theme, settings);
        pane.spawn((widgets::text_button(theme), CopyNameButton))
            .with_children(|button| {
                button.spawn(widgets::label_text(
                    theme,
                    "Copy the font face name to clipboard",
                ));
            });
    });
}

/// The collection member selector, hidden until a collection is shown.
fn spawn_member_row(pane: &mut ChildSpawnerCommands, theme: &CurrentTheme) {
    pane.spawn((
        Node {
            display: Display::None,
            align_items: AlignItems::Center,
            column_gap: Val::Px(WIDGET_ROW_LEADING),
            ..default()
        },
        MemberRow,
    ))
    .with_children(|member_row| {
        member_row.spawn(widgets::label_text(theme, "Font:"));
        member_row.spawn((
            Node {
                column_gap: Val::Px(LABEL_VALUE_SPACING),
                flex_wrap: FlexWrap::Wrap,
                ..default()
            },
            MemberButtonContainer,
        ));
    });
}

/// One labelled read-only field of the info pane.
fn spawn_field(pane: &mut ChildSpawnerCommands, theme: &CurrentTheme, field: InfoField) {
    pane.spawn(Node {
        flex_direction: FlexDirection::Column,
        row_gap: Val::Px(LABEL_VALUE_SPACING),
        ..default()
    })
    .with_children(|group| {
        group.spawn(widgets::label_text(theme, field.label()));
        group
            .spawn((widgets::field_node(theme), field))
            .with_children(|container| {
                container.spawn((widgets::value_text(theme, ""), InfoValueText(field)));
            });
    });
}

fn spawn_highlight_checkbox(
    pane: &mut ChildSpawnerCommands,
    theme: &CurrentTheme,
    settings: &FontpeekSettings,
) {
    pane.spawn((
        Button,
        Node {
            align_items: AlignItems::Center,
            column_gap: Val::Px(WIDGET_ROW_LEADING),
            ..default()
        },
        HighlightCheckbox,
    ))
    .with_children(|checkbox| {
        checkbox
            .spawn((
                Node {
                    width: Val::Px(WIDGET_TEXT_FONT_SIZE),
                    height: Val::Px(WIDGET_TEXT_FONT_SIZE),
                    border: UiRect::all(Val::Px(WIDGET_BORDER_WIDTH)),
                    padding: UiRect::all(Val::Px(LABEL_VALUE_SPACING)),
                    ..default()
                },
                BackgroundColor(theme.field_background()),
                BorderColor(theme.widget_border_color()),
                BorderRadius::all(Val::Px(WIDGET_BORDER_RADIUS)),
            ))
            .with_children(|outline| {
                outline.spawn((
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(theme.checkbox_mark()),
                    if settings.highlight_face_name {
                        Visibility::Inherited
                    } else {
                        Visibility::Hidden
                    },
                    HighlightCheckboxMark,
                ));
            });
        checkbox.spawn(widgets::label_text(
            theme,
            "Highlight the full font face name",
        ));
    });
}

/// Bottom row: the open buttons and the current path label.
fn spawn_controls_row(root: &mut ChildSpawnerCommands, theme: &CurrentTheme) {
    root.spawn(Node {
        align_items: AlignItems::Center,
        column_gap: Val::Px(WIDGET_ROW_LEADING),
        ..default()
    })
    .with_children(|controls| {
        controls
            .spawn((widgets::text_button(theme), OpenFileButton))
            .with_children(|button| {
                button.spawn(widgets::label_text(theme, "Open file"));
            });
        controls
            .spawn((widgets::text_button(theme), OpenFolderButton))
            .with_children(|button| {
                button.spawn(widgets::label_text(theme, "Open folder"));
            });
        if font_dirs::system_font_dir().is_some() {
            controls
                .spawn((widgets::text_button(theme), SystemFontsButton))
                .with_children(|button| {
                    button.spawn(widgets::label_text(theme, "System fonts"));
                });
        }
        controls.spawn((widgets::value_text(theme, ""), CurrentPathLabel));
    });
}
