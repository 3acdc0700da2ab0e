//! Message types for the Log Uploader UI.

use iced::keyboard;
use std::path::PathBuf;

use super::toast::ToastId;
use crate::upload::{SubmissionId, SubmissionOutcome};

/// All possible messages that can be sent in the application
#[derive(Debug, Clone)]
pub enum Message {
    // File selection
    BrowsePressed,
    FilePicked(Option<PathBuf>),
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),

    // Submission
    SubmitPressed,
    SubmissionFinished(SubmissionId, SubmissionOutcome),

    // Dashboard
    OpenDashboard,
    DashboardOpened(Result<(), String>),

    // Config persistence
    ConfigSaved(Result<(), String>),

    // Toasts
    ToastTick,
    ToastExpired(ToastId),
    ToastForceRemove(ToastId),
    ToastDismiss(ToastId),

    // Keyboard shortcuts
    KeyPressed(keyboard::Key, keyboard::Modifiers),
}
