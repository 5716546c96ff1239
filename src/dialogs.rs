use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::config::SUGGESTED_FILENAME;

/// Blocking user interaction needed by the controller.
pub trait Dialogs {
    fn warning(&self, title: &str, message: &str);
    fn error(&self, title: &str, message: &str);
    fn info(&self, title: &str, message: &str);
    /// Asks where to save the QR code, `None` if the user cancelled.
    fn choose_save_path(&self) -> Option<PathBuf>;
}

/// Native message boxes and file chooser.
pub struct NativeDialogs;

impl NativeDialogs {
    fn show(level: MessageLevel, title: &str, message: &str) {
        MessageDialog::new()
            .set_level(level)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

impl Dialogs for NativeDialogs {
    fn warning(&self, title: &str, message: &str) {
        Self::show(MessageLevel::Warning, title, message);
    }

    fn error(&self, title: &str, message: &str) {
        Self::show(MessageLevel::Error, title, message);
    }

    fn info(&self, title: &str, message: &str) {
        Self::show(MessageLevel::Info, title, message);
    }

    fn choose_save_path(&self) -> Option<PathBuf> {
        FileDialog::new()
            .set_title("Save QR code")
            .set_file_name(SUGGESTED_FILENAME)
            .add_filter("PNG Files", &["png"])
            .add_filter("JPEG Files", &["jpg", "jpeg"])
            .add_filter("All Files", &["*"])
            .save_file()
    }
}
