//! System clipboard access
//!
//! A single text payload per copy action. Whether the value survives
//! process exit depends on the platform's clipboard ownership model;
//! arboard does what it can and we do not promise more.

use anyhow::{Context, Result};

/// Place `text` on the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_string())
        .context("failed to set clipboard text")?;
    Ok(())
}
