//! Font metadata reading
//!
//! This module contains the only real decision logic in the application:
//! opening a font file (or one member of a collection), classifying it by
//! the outline tables it carries, and pulling the human-readable fields
//! out of its naming table. Everything else in the crate is presentation.

pub mod classify;
pub mod collection;
pub mod error;
pub mod reader;

#[cfg(test)]
mod tests;

pub use classify::FontKind;
pub use collection::{is_collection, list_members};
pub use error::FaceReadError;
pub use reader::{read_face, FaceInfo};
