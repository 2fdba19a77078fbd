//! Presentation shell
//!
//! Bevy UI wiring: the file list on the left, the info pane on the
//! right, the open/copy controls, and the modal dialogs. All font reads
//! happen synchronously in these systems, in direct response to a user
//! action.

pub mod controls;
pub mod dialogs;
pub mod file_list;
pub mod info_pane;
pub mod layout;
pub mod theme;
pub mod widgets;

use crate::core::state::{
    Browser, CopyFaceNameEvent, DisplayedFace, OpenFolderEvent, SelectMemberEvent, ShowFileEvent,
};
use bevy::prelude::*;

pub struct FontpeekUiPlugin;

impl Plugin for FontpeekUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Browser>()
            .init_resource::<DisplayedFace>()
            .add_event::<ShowFileEvent>()
            .add_event::<OpenFolderEvent>()
            .add_event::<SelectMemberEvent>()
            .add_event::<CopyFaceNameEvent>()
            .add_systems(Startup, layout::spawn_layout)
            .add_systems(
                Update,
                (
                    controls::handle_open_buttons,
                    controls::update_button_feedback,
                    controls::update_current_path_label,
                    file_list::handle_open_folder_events,
                    file_list::rebuild_file_list,
                    file_list::handle_file_buttons,
                    file_list::scroll_file_list,
                ),
            )
            .add_systems(
                Update,
                (
                    info_pane::handle_show_file_events,
                    info_pane::rebuild_member_buttons,
                    info_pane::handle_member_buttons,
                    info_pane::handle_select_member_events,
                    info_pane::update_info_fields,
                    info_pane::handle_highlight_checkbox,
                    info_pane::apply_highlight,
                    info_pane::handle_copy_button,
                    info_pane::handle_copy_events,
                ),
            );
    }
}
