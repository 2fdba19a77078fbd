//! Modal dialogs
//!
//! Read failures and no-op copies surface as native modal dialogs; the
//! process never exits over them.

use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Show a modal error dialog and wait for it to be dismissed.
pub fn error_dialog(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Show a modal informational dialog and wait for it to be dismissed.
pub fn info_dialog(title: &str, message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
