//! Error taxonomy for font reads
//!
//! A read either succeeds completely or fails with one of these; there is
//! no partial recovery. The shell converts any of them into a single
//! modal message.

use read_fonts::ReadError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceReadError {
    /// The file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The bytes are not a recognized font, or a required table is
    /// missing or malformed.
    #[error("not a recognized font: {0}")]
    Format(#[from] ReadError),

    /// A collection member index past the end of the container.
    #[error("font index {index} out of range (collection has {count} fonts)")]
    IndexOutOfRange { index: u32, count: u32 },
}

impl FaceReadError {
    pub(crate) fn file_access(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.to_path_buf(),
            source,
        }
    }
}
