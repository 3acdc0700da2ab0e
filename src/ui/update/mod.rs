//! Update handlers for application messages.
//!
//! This module is split into submodules by concern:
//! - `upload`: File selection, submission and the dashboard button
//! - `toast`: Toast creation, timers and animation frames
//! - `keyboard`: Keyboard shortcuts

mod keyboard;
mod toast;
mod upload;

use iced::Task;
use std::path::PathBuf;

use super::messages::Message;

pub use keyboard::shortcut;
pub use toast::{handle_toast, notify};
pub use upload::handle_upload;

/// Helper to pick a single file, starting in `directory` when known
pub(crate) fn pick_file_task(directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title("Select a log file");
            if let Some(dir) = directory {
                dialog = dialog.set_directory(dir);
            }
            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::FilePicked,
    )
}

/// Helper to persist the config in the background
pub(crate) fn save_config_task(config: crate::config::Config) -> Task<Message> {
    Task::perform(
        async move { crate::config::save_async(config).await.map_err(|e| e.to_string()) },
        Message::ConfigSaved,
    )
}
