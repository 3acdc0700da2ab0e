//! Submit control state machine.
//!
//! Owns the selection, the submit control (enabled flag + label) and the
//! filename label. The GUI renders straight from these fields and forwards
//! user actions to the `on_*` methods; network I/O happens elsewhere and
//! reports back through [`UploadController::on_submission_finished`].
//!
//! ```text
//!   idle ──select──▶ ready ──submit──▶ in flight ──finished──▶ idle (restored)
//!    ▲                 │
//!    └────clear────────┘
//! ```

use std::path::PathBuf;

use super::domain::{BUSY_LABEL, SUBMIT_LABEL, SelectionState, SubmissionOutcome};

/// Identifies one submission so a late or duplicate completion can be told
/// apart from the one currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

/// Visible state of the submit button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    enabled: bool,
    label: String,
}

impl SubmitControl {
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A submission that has been started and must be finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: SubmissionId,
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct UploadController {
    selection: SelectionState,
    submit: SubmitControl,
    /// "Selected: <name>" or empty
    file_label: String,
    in_flight: Option<SubmissionId>,
    next_id: u64,
}

impl UploadController {
    /// Nothing selected, submit disabled.
    pub fn new() -> Self {
        Self {
            selection: SelectionState::default(),
            submit: SubmitControl {
                enabled: false,
                label: SUBMIT_LABEL.to_string(),
            },
            file_label: String::new(),
            in_flight: None,
            next_id: 0,
        }
    }

    #[cfg(test)]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn file_label(&self) -> &str {
        &self.file_label
    }

    /// Whether a submission is in flight
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether the user may pick a different file right now
    pub fn can_select(&self) -> bool {
        !self.is_busy()
    }

    /// The file selection changed to `file`.
    ///
    /// The whole control surface is locked while a submission is in flight,
    /// so changes arriving then are dropped. Returns whether the change was
    /// applied.
    pub fn on_selection_changed(&mut self, file: Option<PathBuf>) -> bool {
        if self.is_busy() {
            tracing::debug!("Ignoring selection change while an upload is in flight");
            return false;
        }

        self.selection = SelectionState::new(file);
        self.submit.enabled = self.selection.has_file();
        match self.selection.file_name() {
            Some(name) => {
                tracing::debug!(file = %name, "File selected");
                self.file_label = format!("Selected: {name}");
            }
            None => self.file_label.clear(),
        }
        true
    }

    /// The user asked to submit.
    ///
    /// Without a selected file (or while already uploading) this does
    /// nothing and returns `None`. Otherwise the submit control switches to
    /// its busy state and the caller must send the file and report back via
    /// [`on_submission_finished`](Self::on_submission_finished).
    pub fn on_submit(&mut self) -> Option<PendingSubmission> {
        if self.is_busy() {
            return None;
        }
        let path = self.selection.file()?.to_path_buf();

        self.submit.enabled = false;
        self.submit.label = BUSY_LABEL.to_string();

        let id = SubmissionId(self.next_id);
        self.next_id += 1;
        self.in_flight = Some(id);

        Some(PendingSubmission { id, path })
    }

    /// The submission `id` resolved to `outcome`.
    ///
    /// Restores the control surface and hands the outcome back for
    /// reporting. A completion for anything but the in-flight submission is
    /// dropped, which is what makes the restore happen once per submission.
    pub fn on_submission_finished(
        &mut self,
        id: SubmissionId,
        outcome: SubmissionOutcome,
    ) -> Option<SubmissionOutcome> {
        if self.in_flight != Some(id) {
            tracing::warn!(?id, "Dropping completion for a submission that is not in flight");
            return None;
        }

        self.in_flight = None;
        self.restore();
        Some(outcome)
    }

    /// Back to the idle form: button enabled with its normal label, nothing
    /// selected. Submitting from here is a no-op until a file is chosen.
    fn restore(&mut self) {
        self.submit.enabled = true;
        self.submit.label = SUBMIT_LABEL.to_string();
        self.selection.clear();
        self.file_label.clear();
    }
}

impl Default for UploadController {
    fn default() -> Self {
        Self::new()
    }
}
