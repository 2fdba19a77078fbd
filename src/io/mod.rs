//! Filesystem and platform integration
//!
//! Directory browsing, the well-known font directory provider, and the
//! system clipboard.

pub mod browse;
pub mod clipboard;
pub mod font_dirs;
