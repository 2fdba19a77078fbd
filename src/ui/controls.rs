//! Open buttons and the status label
//!
//! The native pickers block the frame while open; that is fine for a
//! utility that does nothing else while the user is choosing a file.

use crate::core::state::{Browser, OpenFolderEvent, OpenedTarget, ShowFileEvent};
use crate::io::browse::FONT_EXTENSIONS;
use crate::io::font_dirs;
use crate::ui::file_list::FileListItem;
use crate::ui::info_pane::{HighlightCheckbox, MemberButton};
use crate::ui::theme::CurrentTheme;
use bevy::prelude::*;

#[derive(Component, Default)]
pub struct OpenFileButton;

#[derive(Component, Default)]
pub struct OpenFolderButton;

#[derive(Component, Default)]
pub struct SystemFontsButton;

/// The "Current file/folder" status text.
#[derive(Component, Default)]
pub struct CurrentPathLabel;

/// Runs the native pickers and turns their results into events.
pub fn handle_open_buttons(
    file_query: Query<&Interaction, (Changed<Interaction>, With<OpenFileButton>)>,
    folder_query: Query<&Interaction, (Changed<Interaction>, With<OpenFolderButton>)>,
    system_query: Query<&Interaction, (Changed<Interaction>, With<SystemFontsButton>)>,
    mut browser: ResMut<Browser>,
    mut show_events: EventWriter<ShowFileEvent>,
    mut folder_events: EventWriter<OpenFolderEvent>,
) {
    if file_query.iter().any(|i| *i == Interaction::Pressed) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Font files", FONT_EXTENSIONS)
            .pick_file()
        {
            info!("opening file {}", path.display());
            browser.set_single_file(&path);
            show_events.write(ShowFileEvent { path });
        }
    }
    if folder_query.iter().any(|i| *i == Interaction::Pressed) {
        if let Some(dir) = rfd::FileDialog::new().pick_folder() {
            info!("opening folder {}", dir.display());
            folder_events.write(OpenFolderEvent { dir });
        }
    }
    if system_query.iter().any(|i| *i == Interaction::Pressed) {
        if let Some(dir) = font_dirs::system_font_dir() {
            info!("opening system fonts {}", dir.display());
            folder_events.write(OpenFolderEvent { dir });
        }
    }
}

/// Hover and press feedback for the plain push buttons. List entries and
/// member buttons carry selection state and paint themselves.
pub fn update_button_feedback(
    theme: Res<CurrentTheme>,
    mut interaction_query: Query<
        (&Interaction, &mut BackgroundColor),
        (
            Changed<Interaction>,
            With<Button>,
            Without<FileListItem>,
            Without<MemberButton>,
            Without<HighlightCheckbox>,
        ),
    >,
) {
    for (interaction, mut background) in interaction_query.iter_mut() {
        *background = BackgroundColor(match interaction {
            Interaction::Pressed => theme.button_pressed(),
            Interaction::Hovered => theme.button_hovered(),
            Interaction::None => theme.button_regular(),
        });
    }
}

/// Mirrors the last opened target into the status label.
pub fn update_current_path_label(
    browser: Res<Browser>,
    mut label_query: Query<&mut Text, With<CurrentPathLabel>>,
) {
    if !browser.is_changed() {
        return;
    }
    let value = match &browser.opened {
        Some(OpenedTarget::File(path)) => format!("Current file: {}", path.display()),
        Some(OpenedTarget::Folder(path)) => format!("Current folder: {}", path.display()),
        None => String::new(),
    };
    for mut text in label_query.iter_mut() {
        *text = Text::new(value.clone());
    }
}
