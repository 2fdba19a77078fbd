//! Collection container handling
//!
//! TTC/OTC files hold several complete fonts behind one `ttcf` header.
//! The shell probes the signature to decide whether to show the member
//! selector, and enumerates member display names to populate it. Full
//! metadata for a member is only read on demand via `read_face`.

use read_fonts::types::NameId;
use read_fonts::{CollectionRef, TableProvider};
use std::fs::{self, File};
use std::io::{ErrorKind, Read};
use std::path::Path;

use super::error::FaceReadError;
use super::reader::windows_unicode_name;

/// The 4-byte signature at offset 0 of a collection container.
pub const COLLECTION_SIGNATURE: &[u8; 4] = b"ttcf";

/// Probe whether the file at `path` is a collection container.
///
/// Files shorter than the signature are simply not collections.
pub fn is_collection(path: &Path) -> Result<bool, FaceReadError> {
    let mut file = File::open(path).map_err(|source| FaceReadError::file_access(path, source))?;
    let mut signature = [0u8; 4];
    match file.read_exact(&mut signature) {
        Ok(()) => Ok(&signature == COLLECTION_SIGNATURE),
        Err(error) if error.kind() == ErrorKind::UnexpectedEof => Ok(false),
        Err(source) => Err(FaceReadError::file_access(path, source)),
    }
}

/// Enumerate the display names of every member of a collection, in
/// container order.
///
/// The display name is the member's full name (name ID 4) under the same
/// fixed lookup policy as the reader; members without one get an empty
/// string so the selector keeps one entry per member.
pub fn list_members(path: &Path) -> Result<Vec<String>, FaceReadError> {
    let data = fs::read(path).map_err(|source| FaceReadError::file_access(path, source))?;
    let collection = CollectionRef::new(&data)?;
    let mut names = Vec::with_capacity(collection.len() as usize);
    for font in collection.iter() {
        let font = font?;
        let full_name = font
            .name()
            .ok()
            .and_then(|name| windows_unicode_name(&name, NameId::FULL_NAME))
            .unwrap_or_default();
        names.push(full_name);
    }
    Ok(names)
}
