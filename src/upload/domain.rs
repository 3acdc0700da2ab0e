//! Upload domain types.
//!
//! These are transient, UI-scoped values: nothing here outlives a single
//! submission cycle.

use std::path::{Path, PathBuf};

/// Submit control label while idle
pub const SUBMIT_LABEL: &str = "Upload and process";

/// Submit control label while a request is in flight
pub const BUSY_LABEL: &str = "Uploading…";

/// Shown when the server reports failure without an `error` text
pub const SERVER_ERROR_FALLBACK: &str = "Upload failed";

/// Multipart field carrying the file
pub const FILE_FIELD: &str = "file";

/// Used when the selected path has no final component
const UNNAMED_FILE: &str = "upload.log";

/// The file currently chosen for upload, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    file: Option<PathBuf>,
}

impl SelectionState {
    pub fn new(file: Option<PathBuf>) -> Self {
        Self { file }
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    /// Display name of the selected file
    pub fn file_name(&self) -> Option<String> {
        self.file.as_deref().map(display_name)
    }

    pub fn clear(&mut self) {
        self.file = None;
    }
}

/// An opened file and its name, ready to hand to the transport.
///
/// The contents are not loaded up front; the transport streams them from
/// `file` while the request is being sent.
#[derive(Debug)]
pub struct SubmissionRequest {
    pub file: tokio::fs::File,
    pub file_name: String,
    /// Size in bytes when the file was opened
    pub length: u64,
}

impl SubmissionRequest {
    /// Open the file at `path` for streaming.
    pub async fn open(path: &Path) -> Result<Self, UploadError> {
        let read_error = |source| UploadError::ReadFile {
            path: path.to_path_buf(),
            source,
        };

        let file = tokio::fs::File::open(path).await.map_err(read_error)?;
        let metadata = file.metadata().await.map_err(read_error)?;
        if metadata.is_dir() {
            return Err(read_error(std::io::Error::from(
                std::io::ErrorKind::IsADirectory,
            )));
        }

        Ok(Self {
            file,
            file_name: display_name(path),
            length: metadata.len(),
        })
    }

    /// Read whatever is left of the file into memory.
    #[cfg(test)]
    pub async fn into_bytes(mut self) -> std::io::Result<Vec<u8>> {
        use tokio::io::AsyncReadExt;

        let mut contents = Vec::new();
        self.file.read_to_end(&mut contents).await?;
        Ok(contents)
    }
}

/// Result of one upload attempt.
///
/// Produced exactly once per submission and consumed by the toast layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Server accepted and processed the file
    Success { message: String },
    /// Server was reached but reported failure
    ServerError { message: String },
    /// Server was not reached, or its reply could not be read
    NetworkError { message: String },
}

impl SubmissionOutcome {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success {
            message: message.into(),
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::ServerError {
            message: message.into(),
        }
    }

    /// Network-class failure, prefixed so the user can tell it apart from
    /// a server-reported error.
    pub fn network(description: impl std::fmt::Display) -> Self {
        Self::NetworkError {
            message: format!("Network error: {description}"),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success { message }
            | Self::ServerError { message }
            | Self::NetworkError { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Errors that keep a submission from being sent at all
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("could not read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error(transparent)]
    Endpoint(#[from] crate::config::ConfigError),
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNNAMED_FILE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection() {
        let selection = SelectionState::default();
        assert!(!selection.has_file());
        assert!(selection.file_name().is_none());
    }

    #[test]
    fn test_selection_file_name_is_last_component() {
        let selection = SelectionState::new(Some(PathBuf::from("/var/log/nginx/access.log")));
        assert!(selection.has_file());
        assert_eq!(selection.file_name().as_deref(), Some("access.log"));
    }

    #[test]
    fn test_selection_clear() {
        let mut selection = SelectionState::new(Some(PathBuf::from("a.log")));
        selection.clear();
        assert_eq!(selection, SelectionState::default());
    }

    #[test]
    fn test_network_outcome_keeps_description() {
        let outcome = SubmissionOutcome::network("timeout");
        assert!(matches!(outcome, SubmissionOutcome::NetworkError { .. }));
        assert!(outcome.message().contains("timeout"));
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_outcome_message_accessor() {
        assert_eq!(SubmissionOutcome::success("Processed").message(), "Processed");
        assert_eq!(SubmissionOutcome::server_error("Bad file").message(), "Bad file");
        assert!(SubmissionOutcome::success("ok").is_success());
    }

    #[tokio::test]
    async fn test_request_opens_file_without_reading_it() {
        let (path, _dir) = crate::test_utils::temp_log_file("app.log", "GET / 200\n");
        let request = SubmissionRequest::open(&path).await.unwrap();
        assert_eq!(request.file_name, "app.log");
        assert_eq!(request.length, 10);
        assert_eq!(request.into_bytes().await.unwrap(), b"GET / 200\n");
    }

    #[tokio::test]
    async fn test_request_for_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = SubmissionRequest::open(dir.path()).await.unwrap_err();
        assert!(matches!(err, UploadError::ReadFile { .. }));
    }

    #[tokio::test]
    async fn test_request_for_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.log");
        let err = SubmissionRequest::open(&missing).await.unwrap_err();
        assert!(matches!(err, UploadError::ReadFile { .. }));
        assert!(err.to_string().contains("gone.log"));
    }
}
