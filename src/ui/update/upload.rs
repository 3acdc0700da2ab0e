//! File selection, submission and dashboard handlers.

use iced::Task;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::dashboard;
use crate::upload::{self, PendingSubmission, SubmissionOutcome, UploadApi};

use super::super::messages::Message;
use super::super::state::UploaderState;
use super::super::toast::Severity;
use super::{notify, pick_file_task, save_config_task};

/// Toast severity for a finished submission
pub fn severity_for(outcome: &SubmissionOutcome) -> Severity {
    match outcome {
        SubmissionOutcome::Success { .. } => Severity::Success,
        SubmissionOutcome::ServerError { .. } | SubmissionOutcome::NetworkError { .. } => {
            Severity::Error
        }
    }
}

/// Handle upload-related messages
pub fn handle_upload(s: &mut UploaderState, msg: &Message) -> Task<Message> {
    match msg {
        Message::BrowsePressed => {
            if !s.controller.can_select() {
                return Task::none();
            }
            pick_file_task(s.config.ui.last_directory.clone())
        }
        Message::FilePicked(Some(path)) => select(s, path),
        Message::FilePicked(None) => {
            // Cancelled dialog keeps whatever was selected before
            tracing::debug!("File dialog cancelled");
            Task::none()
        }
        Message::FileHovered => {
            s.drop_hover = s.controller.can_select();
            Task::none()
        }
        Message::FilesHoveredLeft => {
            s.drop_hover = false;
            Task::none()
        }
        Message::FileDropped(path) => {
            s.drop_hover = false;
            if path.is_dir() {
                tracing::debug!("Ignoring dropped directory {:?}", path);
                return Task::none();
            }
            select(s, path)
        }
        Message::SubmitPressed => match s.controller.on_submit() {
            Some(pending) => {
                tracing::info!(path = ?pending.path, "Upload started");
                submit_task(s.api.clone(), pending)
            }
            None => Task::none(),
        },
        Message::SubmissionFinished(id, outcome) => {
            match s.controller.on_submission_finished(*id, outcome.clone()) {
                Some(outcome) => {
                    let severity = severity_for(&outcome);
                    notify(s, outcome.message(), severity)
                }
                None => Task::none(),
            }
        }
        Message::OpenDashboard => match dashboard::dashboard_url(&s.config.server) {
            Ok(url) => Task::perform(
                async move { dashboard::open_dashboard(url).await.map_err(|e| e.to_string()) },
                Message::DashboardOpened,
            ),
            Err(e) => {
                tracing::warn!("{}", e);
                Task::none()
            }
        },
        Message::DashboardOpened(Err(e)) => {
            tracing::warn!("Failed to open dashboard: {}", e);
            Task::none()
        }
        Message::ConfigSaved(Err(e)) => {
            tracing::warn!("Failed to save config: {}", e);
            Task::none()
        }
        _ => Task::none(),
    }
}

/// Apply a new selection and remember its directory for the next dialog
fn select(s: &mut UploaderState, path: &Path) -> Task<Message> {
    if !s.controller.on_selection_changed(Some(path.to_path_buf())) {
        return Task::none();
    }
    remember_directory(s, path.parent()).map_or_else(Task::none, save_config_task)
}

/// Record `dir` as the last directory and return the config to write back.
///
/// Only the stored config is returned; command-line overrides never reach
/// the config file.
fn remember_directory(s: &mut UploaderState, dir: Option<&Path>) -> Option<Config> {
    let dir = dir.filter(|d| !d.as_os_str().is_empty())?;
    if s.config.ui.last_directory.as_deref() == Some(dir) {
        return None;
    }

    s.config.ui.last_directory = Some(dir.to_path_buf());
    s.stored.ui.last_directory = Some(dir.to_path_buf());
    Some(s.stored.clone())
}

fn submit_task(api: Arc<dyn UploadApi>, pending: PendingSubmission) -> Task<Message> {
    let PendingSubmission { id, path } = pending;
    Task::perform(
        async move { upload::submit_file(api.as_ref(), path).await },
        move |outcome| Message::SubmissionFinished(id, outcome),
    )
}
