//! Shared UI state and events
//!
//! Two resources cover everything the shell remembers: the folder listing
//! on the left and the currently displayed face on the right. Both are
//! replaced wholesale on every user action; nothing is cached between
//! selections.

use crate::font::FaceInfo;
use bevy::prelude::*;
use std::path::PathBuf;

/// What the user last opened, for the status label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenedTarget {
    File(PathBuf),
    Folder(PathBuf),
}

/// The opened folder and its filtered file listing.
#[derive(Resource, Debug, Default)]
pub struct Browser {
    pub folder: Option<PathBuf>,
    /// File names in enumeration order, already extension-filtered.
    pub files: Vec<String>,
    pub selected: Option<usize>,
    pub opened: Option<OpenedTarget>,
}

impl Browser {
    /// Full path of the selected file, if any.
    pub fn selected_path(&self) -> Option<PathBuf> {
        let folder = self.folder.as_ref()?;
        let name = self.files.get(self.selected?)?;
        Some(folder.join(name))
    }

    /// Replace the listing with a folder scan result.
    pub fn set_folder(&mut self, folder: PathBuf, files: Vec<String>) {
        self.selected = if files.is_empty() { None } else { Some(0) };
        self.opened = Some(OpenedTarget::Folder(folder.clone()));
        self.folder = Some(folder);
        self.files = files;
    }

    /// Replace the listing with a single file.
    pub fn set_single_file(&mut self, path: &std::path::Path) {
        self.folder = path.parent().map(|parent| parent.to_path_buf());
        self.files = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| vec![name.to_string()])
            .unwrap_or_default();
        self.selected = if self.files.is_empty() { None } else { Some(0) };
        self.opened = Some(OpenedTarget::File(path.to_path_buf()));
    }
}

/// The face currently shown in the info pane.
///
/// Cleared before every new read, so a failed read leaves the pane empty
/// rather than showing a stale or partial record.
#[derive(Resource, Debug, Default)]
pub struct DisplayedFace {
    pub face: Option<FaceInfo>,
    /// Member display names when the selected file is a collection.
    pub members: Vec<String>,
    pub member_index: u32,
}

impl DisplayedFace {
    pub fn clear(&mut self) {
        self.face = None;
        self.members.clear();
        self.member_index = 0;
    }

    pub fn is_collection(&self) -> bool {
        !self.members.is_empty()
    }
}

/// Show the font at `path` in the info pane (clears first, then reads).
#[derive(Event, Debug)]
pub struct ShowFileEvent {
    pub path: PathBuf,
}

/// List `dir` into the browser and show its first entry, if any.
#[derive(Event, Debug)]
pub struct OpenFolderEvent {
    pub dir: PathBuf,
}

/// Switch to another member of the currently selected collection.
#[derive(Event, Debug)]
pub struct SelectMemberEvent {
    pub index: u32,
}

/// Copy the canonical face name of the displayed face to the clipboard.
#[derive(Event, Debug)]
pub struct CopyFaceNameEvent;
