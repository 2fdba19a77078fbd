//! Core application functionality
//!
//! Application setup, CLI and config handling, and the shared UI state.

pub mod app;
pub mod cli;
pub mod config_file;
pub mod platform;
pub mod settings;
pub mod state;

pub use cli::CliArgs;
pub use settings::FontpeekSettings;
pub use state::{Browser, DisplayedFace};
