//! Info Pane Module
//!
//! The right-hand pane: the collection member selector, the six metadata
//! fields, the highlight checkbox and the copy button. Every field is
//! cleared before a new read, so a failed read leaves the pane empty.

use crate::core::config_file::ConfigFile;
use crate::core::settings::FontpeekSettings;
use crate::core::state::{
    Browser, CopyFaceNameEvent, DisplayedFace, SelectMemberEvent, ShowFileEvent,
};
use crate::font::{self, FaceInfo, FaceReadError, FontKind};
use crate::io::clipboard;
use crate::ui::dialogs;
use crate::ui::theme::*;
use crate::ui::widgets;
use bevy::prelude::*;
use std::path::Path;

// ============================================================================
// COMPONENTS
// ============================================================================

/// The six metadata fields of the info pane, used to mark both the value
/// container (for highlighting) and the value text (for updates).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    Family,
    Subfamily,
    Weight,
    FullName,
    Version,
    PostscriptName,
}

impl InfoField {
    pub const ALL: [InfoField; 6] = [
        InfoField::Family,
        InfoField::Subfamily,
        InfoField::Weight,
        InfoField::FullName,
        InfoField::Version,
        InfoField::PostscriptName,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InfoField::Family => "Font Family:",
            InfoField::Subfamily => "Font Subfamily (type):",
            InfoField::Weight => "Weight:",
            InfoField::FullName => "Full name:",
            InfoField::Version => "Version:",
            InfoField::PostscriptName => "PostScript name:",
        }
    }

    /// Displayed text for this field; absent values render empty.
    pub fn value_of(self, face: Option<&FaceInfo>) -> String {
        let Some(face) = face else {
            return String::new();
        };
        match self {
            InfoField::Family => face.family.clone().unwrap_or_default(),
            InfoField::Subfamily => face.subfamily.clone().unwrap_or_default(),
            InfoField::Weight => face.weight_class.to_string(),
            InfoField::FullName => face.full_name.clone().unwrap_or_default(),
            InfoField::Version => face.version.clone().unwrap_or_default(),
            InfoField::PostscriptName => face.postscript_name.clone().unwrap_or_default(),
        }
    }
}

/// Marker for the value text inside a field container.
#[derive(Component)]
pub struct InfoValueText(pub InfoField);

/// The whole member selector row, hidden for single fonts.
#[derive(Component, Default)]
pub struct MemberRow;

/// Container the member buttons are rebuilt into.
#[derive(Component)]
pub struct MemberButtonContainer;

/// One button per collection member.
#[derive(Component)]
pub struct MemberButton {
    pub index: u32,
}

/// The highlight toggle.
#[derive(Component, Default)]
pub struct HighlightCheckbox;

/// The tick inside the checkbox, shown when the toggle is on.
#[derive(Component, Default)]
pub struct HighlightCheckboxMark;

/// The copy-to-clipboard button.
#[derive(Component, Default)]
pub struct CopyNameButton;

// ============================================================================
// SYSTEMS
// ============================================================================

/// Reads the font named by a `ShowFileEvent` and fills the displayed
/// record, or shows a modal error and leaves the pane cleared.
pub fn handle_show_file_events(
    mut events: EventReader<ShowFileEvent>,
    mut displayed: ResMut<DisplayedFace>,
) {
    for event in events.read() {
        displayed.clear();
        match show_file(&event.path, &mut displayed) {
            Ok(()) => {
                if let Some(face) = &displayed.face {
                    info!(
                        "read {} as {} ({} members)",
                        event.path.display(),
                        face.kind.label(),
                        displayed.members.len().max(1)
                    );
                }
            }
            Err(error) => {
                warn!("failed to read {}: {}", event.path.display(), error);
                displayed.clear();
                dialogs::error_dialog(
                    "Error",
                    &format!("Error while trying to read the font data: {error}"),
                );
            }
        }
    }
}

fn show_file(path: &Path, displayed: &mut DisplayedFace) -> Result<(), FaceReadError> {
    if font::is_collection(path)? {
        displayed.members = font::list_members(path)?;
        displayed.member_index = 0;
        displayed.face = Some(font::read_face(path, Some(0))?);
    } else {
        displayed.face = Some(font::read_face(path, None)?);
    }
    Ok(())
}

/// Switching between the fonts in a collection.
pub fn handle_select_member_events(
    mut events: EventReader<SelectMemberEvent>,
    browser: Res<Browser>,
    mut displayed: ResMut<DisplayedFace>,
) {
    for event in events.read() {
        let Some(path) = browser.selected_path() else {
            continue;
        };
        displayed.face = None;
        displayed.member_index = event.index;
        match font::read_face(&path, Some(event.index)) {
            Ok(face) => displayed.face = Some(face),
            Err(error) => {
                warn!(
                    "failed to read member {} of {}: {}",
                    event.index,
                    path.display(),
                    error
                );
                dialogs::error_dialog(
                    "Error",
                    &format!("Error while trying to read the font data: {error}"),
                );
            }
        }
    }
}

/// Rebuilds the member selector whenever the displayed record changes.
pub fn rebuild_member_buttons(
    mut commands: Commands,
    theme: Res<CurrentTheme>,
    displayed: Res<DisplayedFace>,
    mut row_query: Query<&mut Node, With<MemberRow>>,
    container_query: Query<Entity, With<MemberButtonContainer>>,
    existing_buttons: Query<Entity, With<MemberButton>>,
) {
    if !displayed.is_changed() {
        return;
    }
    let Ok(container_entity) = container_query.single() else {
        return;
    };

    for entity in existing_buttons.iter() {
        commands.entity(entity).despawn();
    }

    if let Ok(mut row_node) = row_query.single_mut() {
        row_node.display = if displayed.is_collection() {
            Display::Flex
        } else {
            Display::None
        };
    }
    if !displayed.is_collection() {
        return;
    }

    for (index, name) in displayed.members.iter().enumerate() {
        let is_selected = index as u32 == displayed.member_index;
        let label = if name.is_empty() {
            format!("#{index}")
        } else {
            name.clone()
        };
        let button_entity = commands
            .spawn((
                widgets::text_button(&theme),
                BackgroundColor(if is_selected {
                    theme.button_pressed()
                } else {
                    theme.button_regular()
                }),
                MemberButton {
                    index: index as u32,
                },
            ))
            .with_children(|button| {
                button.spawn(widgets::label_text(&theme, &label));
            })
            .id();
        commands.entity(container_entity).add_child(button_entity);
    }
}

/// Member button presses become `SelectMemberEvent`s.
pub fn handle_member_buttons(
    interaction_query: Query<(&Interaction, &MemberButton), Changed<Interaction>>,
    displayed: Res<DisplayedFace>,
    mut select_events: EventWriter<SelectMemberEvent>,
) {
    for (interaction, button) in interaction_query.iter() {
        if *interaction == Interaction::Pressed && button.index != displayed.member_index {
            select_events.write(SelectMemberEvent {
                index: button.index,
            });
        }
    }
}

/// Writes the six field values whenever the displayed record changes.
pub fn update_info_fields(
    displayed: Res<DisplayedFace>,
    mut text_query: Query<(&InfoValueText, &mut Text)>,
) {
    if !displayed.is_changed() {
        return;
    }
    for (value, mut text) in text_query.iter_mut() {
        *text = Text::new(value.0.value_of(displayed.face.as_ref()));
    }
}

/// Highlights whichever of full name / PostScript name is the canonical
/// face name for the detected classification.
pub fn apply_highlight(
    settings: Res<FontpeekSettings>,
    displayed: Res<DisplayedFace>,
    theme: Res<CurrentTheme>,
    mut field_query: Query<(&InfoField, &mut BackgroundColor), Without<Button>>,
) {
    let highlighted = if settings.highlight_face_name {
        match displayed.face.as_ref().map(|face| face.kind) {
            Some(FontKind::TrueType) => Some(InfoField::FullName),
            Some(FontKind::Cff) => Some(InfoField::PostscriptName),
            _ => None,
        }
    } else {
        None
    };

    for (field, mut background) in field_query.iter_mut() {
        *background = BackgroundColor(if Some(*field) == highlighted {
            theme.highlight_color()
        } else {
            theme.field_background()
        });
    }
}

/// Toggles the highlight setting, the checkbox tick, and persists the
/// choice to the config file.
pub fn handle_highlight_checkbox(
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<HighlightCheckbox>)>,
    mut settings: ResMut<FontpeekSettings>,
    mut mark_query: Query<&mut Visibility, With<HighlightCheckboxMark>>,
) {
    for interaction in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            settings.highlight_face_name = !settings.highlight_face_name;
            let mut config = ConfigFile::load().unwrap_or_default();
            config.highlight_face_name = Some(settings.highlight_face_name);
            if let Err(error) = config.save() {
                warn!("could not save settings: {}", error);
            }
        }
    }
    let target = if settings.highlight_face_name {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in mark_query.iter_mut() {
        *visibility = target;
    }
}

/// Copy button presses become `CopyFaceNameEvent`s.
pub fn handle_copy_button(
    interaction_query: Query<&Interaction, (Changed<Interaction>, With<CopyNameButton>)>,
    mut copy_events: EventWriter<CopyFaceNameEvent>,
) {
    for interaction in interaction_query.iter() {
        if *interaction == Interaction::Pressed {
            copy_events.write(CopyFaceNameEvent);
        }
    }
}

/// Copies the canonical face name, or tells the user why nothing was
/// copied.
pub fn handle_copy_events(
    mut events: EventReader<CopyFaceNameEvent>,
    displayed: Res<DisplayedFace>,
) {
    for _ in events.read() {
        match displayed.face.as_ref().and_then(FaceInfo::canonical_name) {
            Some(name) => {
                if let Err(error) = clipboard::copy_text(name) {
                    warn!("clipboard copy failed: {}", error);
                    dialogs::error_dialog("Error", &format!("Could not copy to clipboard: {error}"));
                } else {
                    info!("copied face name: {}", name);
                }
            }
            None => {
                dialogs::info_dialog(
                    "Info",
                    "Valid font type has not been detected.\nNothing was copied.",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(kind: FontKind) -> FaceInfo {
        FaceInfo {
            kind,
            family: Some("Foo".into()),
            subfamily: None,
            weight_class: 400,
            full_name: Some("Foo Regular".into()),
            version: None,
            postscript_name: Some("Foo-Regular".into()),
        }
    }

    #[test]
    fn fields_render_empty_without_a_face() {
        for field in InfoField::ALL {
            assert_eq!(field.value_of(None), "");
        }
    }

    #[test]
    fn absent_fields_render_empty_not_placeholder() {
        let face = face(FontKind::TrueType);
        assert_eq!(InfoField::Subfamily.value_of(Some(&face)), "");
        assert_eq!(InfoField::Version.value_of(Some(&face)), "");
        assert_eq!(InfoField::Family.value_of(Some(&face)), "Foo");
        assert_eq!(InfoField::Weight.value_of(Some(&face)), "400");
    }

    #[test]
    fn canonical_name_follows_classification() {
        assert_eq!(face(FontKind::TrueType).canonical_name(), Some("Foo Regular"));
        assert_eq!(face(FontKind::Cff).canonical_name(), Some("Foo-Regular"));
        assert_eq!(face(FontKind::Unknown).canonical_name(), None);
    }
}
