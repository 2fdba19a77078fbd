//! Fontpeek
pub mod core;
pub mod font;
pub mod io;
pub mod ui;
