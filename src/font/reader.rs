//! Reading the metadata of a single font face
//!
//! Opens a font file, classifies it, and extracts the naming-table fields
//! plus the OS/2 weight class. All parsing is delegated to `read-fonts`;
//! the file contents live in an owned buffer that is dropped when the
//! read returns, on both success and failure paths.

use read_fonts::tables::name::Name;
use read_fonts::types::NameId;
use read_fonts::{CollectionRef, FontRef, TableProvider};
use std::fs;
use std::path::Path;

use super::classify::{classify, FontKind};
use super::error::FaceReadError;

/// Platform ID for Microsoft naming-table entries.
const WINDOWS_PLATFORM: u16 = 3;
/// Encoding ID for Unicode BMP under the Microsoft platform.
const UNICODE_BMP_ENCODING: u16 = 1;

/// Metadata of one font face, as displayed by the shell.
///
/// Absent naming-table entries are `None` and render as empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceInfo {
    pub kind: FontKind,
    pub family: Option<String>,
    pub subfamily: Option<String>,
    pub weight_class: u16,
    pub full_name: Option<String>,
    pub version: Option<String>,
    pub postscript_name: Option<String>,
}

impl FaceInfo {
    /// The canonical face name for the copy action: the full name for
    /// TrueType fonts, the PostScript name for CFF fonts, nothing for
    /// unknown classifications.
    pub fn canonical_name(&self) -> Option<&str> {
        match self.kind {
            FontKind::TrueType => self.full_name.as_deref(),
            FontKind::Cff => self.postscript_name.as_deref(),
            FontKind::Unknown => None,
        }
    }
}

/// Read the metadata of the font at `path`.
///
/// `index` selects a member of a collection container and must only be
/// given for files with the `ttcf` signature; `None` reads a single font.
pub fn read_face(path: &Path, index: Option<u32>) -> Result<FaceInfo, FaceReadError> {
    let data = fs::read(path).map_err(|source| FaceReadError::file_access(path, source))?;
    let font = font_at(&data, index)?;
    face_info(&font)
}

/// Resolve a `FontRef` for the requested face within the file data.
fn font_at<'a>(data: &'a [u8], index: Option<u32>) -> Result<FontRef<'a>, FaceReadError> {
    match index {
        None => Ok(FontRef::new(data)?),
        Some(index) => {
            let collection = CollectionRef::new(data)?;
            let count = collection.len();
            if index >= count {
                return Err(FaceReadError::IndexOutOfRange { index, count });
            }
            Ok(collection.get(index)?)
        }
    }
}

fn face_info(font: &FontRef) -> Result<FaceInfo, FaceReadError> {
    let kind = classify(
        font.table_directory()
            .table_records()
            .iter()
            .map(|record| record.tag()),
    );
    // Both tables are required; a font missing either fails the whole read.
    let name = font.name()?;
    let weight_class = font.os2()?.us_weight_class();

    Ok(FaceInfo {
        kind,
        family: windows_unicode_name(&name, NameId::FAMILY_NAME),
        subfamily: windows_unicode_name(&name, NameId::SUBFAMILY_NAME),
        weight_class,
        full_name: windows_unicode_name(&name, NameId::FULL_NAME),
        version: windows_unicode_name(&name, NameId::VERSION_STRING),
        postscript_name: windows_unicode_name(&name, NameId::POSTSCRIPT_NAME),
    })
}

/// Look up a naming-table entry under platform 3 / encoding 1.
///
/// The lookup policy is fixed: no fallback to any other platform or
/// encoding pair, and an absent entry is `None` rather than an error.
pub(crate) fn windows_unicode_name(name: &Name, id: NameId) -> Option<String> {
    name.name_record()
        .iter()
        .find(|record| {
            record.name_id() == id
                && record.platform_id() == WINDOWS_PLATFORM
                && record.encoding_id() == UNICODE_BMP_ENCODING
        })
        .and_then(|record| record.string(name.string_data()).ok())
        .map(|value| value.to_string())
}
