//! File list pane
//!
//! The left pane lists the font files of the opened folder. The entries
//! are plain buttons rebuilt from the `Browser` resource whenever it
//! changes; the selected entry is painted in the pressed button color.

use crate::core::state::{Browser, DisplayedFace, OpenFolderEvent, ShowFileEvent};
use crate::io::browse;
use crate::ui::dialogs;
use crate::ui::theme::*;
use crate::ui::widgets;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

/// Container the list entries are rebuilt into; also the scroll target.
#[derive(Component, Default)]
pub struct FileListContainer;

/// One list entry.
#[derive(Component)]
pub struct FileListItem {
    pub index: usize,
}

/// Lists the folder into the browser and shows its first font, if any.
pub fn handle_open_folder_events(
    mut events: EventReader<OpenFolderEvent>,
    mut browser: ResMut<Browser>,
    mut displayed: ResMut<DisplayedFace>,
    mut show_events: EventWriter<ShowFileEvent>,
) {
    for event in events.read() {
        match browse::list_font_files(&event.dir) {
            Ok(files) => {
                info!("{} font files in {}", files.len(), event.dir.display());
                browser.set_folder(event.dir.clone(), files);
                match browser.selected_path() {
                    Some(path) => {
                        show_events.write(ShowFileEvent { path });
                    }
                    None => displayed.clear(),
                }
            }
            Err(error) => {
                warn!("failed to list {}: {}", event.dir.display(), error);
                dialogs::error_dialog(
                    "Error",
                    &format!("Could not list the folder: {error}"),
                );
            }
        }
    }
}

/// Rebuilds the list entries whenever the browser changes.
pub fn rebuild_file_list(
    mut commands: Commands,
    theme: Res<CurrentTheme>,
    browser: Res<Browser>,
    container_query: Query<Entity, With<FileListContainer>>,
    existing_items: Query<Entity, With<FileListItem>>,
) {
    if !browser.is_changed() {
        return;
    }
    let Ok(container_entity) = container_query.single() else {
        return;
    };

    for entity in existing_items.iter() {
        commands.entity(entity).despawn();
    }

    for (index, name) in browser.files.iter().enumerate() {
        let is_selected = browser.selected == Some(index);
        let item_entity = commands
            .spawn((
                Button,
                Node {
                    min_height: Val::Px(LIST_ITEM_HEIGHT),
                    padding: UiRect::axes(Val::Px(FIELD_PADDING), Val::Px(LABEL_VALUE_SPACING)),
                    align_items: AlignItems::Center,
                    flex_shrink: 0.0,
                    ..default()
                },
                BackgroundColor(if is_selected {
                    theme.button_pressed()
                } else {
                    theme.widget_background_color()
                }),
                BorderRadius::all(Val::Px(WIDGET_BORDER_RADIUS)),
                FileListItem { index },
            ))
            .with_children(|item| {
                item.spawn(widgets::value_text(&theme, name));
            })
            .id();
        commands.entity(container_entity).add_child(item_entity);
    }
}

/// Clicking a list entry selects and shows that file.
pub fn handle_file_buttons(
    interaction_query: Query<(&Interaction, &FileListItem), Changed<Interaction>>,
    mut browser: ResMut<Browser>,
    mut show_events: EventWriter<ShowFileEvent>,
) {
    for (interaction, item) in interaction_query.iter() {
        if *interaction != Interaction::Pressed || browser.selected == Some(item.index) {
            continue;
        }
        browser.selected = Some(item.index);
        if let Some(path) = browser.selected_path() {
            show_events.write(ShowFileEvent { path });
        }
    }
}

/// Mouse wheel scrolling for the file list.
pub fn scroll_file_list(
    mut wheel_events: EventReader<MouseWheel>,
    mut scroll_query: Query<&mut ScrollPosition, With<FileListContainer>>,
) {
    for event in wheel_events.read() {
        let delta = match event.unit {
            MouseScrollUnit::Line => event.y * SCROLL_LINE_HEIGHT,
            MouseScrollUnit::Pixel => event.y,
        };
        for mut scroll in scroll_query.iter_mut() {
            scroll.offset_y -= delta;
        }
    }
}
