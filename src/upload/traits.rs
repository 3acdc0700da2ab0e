//! Transport seam for the upload flow.
//!
//! The controller and service never talk to `reqwest` directly; they go
//! through [`UploadApi`], so tests can substitute a mock and the GUI can
//! keep running with a placeholder when the server URL is misconfigured.

use async_trait::async_trait;

use super::client::UploadClient;
use super::domain::{SubmissionOutcome, SubmissionRequest};

/// Something that can carry a submission to the server.
#[async_trait]
pub trait UploadApi: Send + Sync {
    /// Send the request and classify the reply.
    async fn submit(&self, request: SubmissionRequest) -> SubmissionOutcome;
}

#[async_trait]
impl UploadApi for UploadClient {
    async fn submit(&self, request: SubmissionRequest) -> SubmissionOutcome {
        self.submit(request).await
    }
}

/// Stand-in used when no client could be built (e.g. a malformed
/// `server.base_url`). Every submission becomes a network error carrying
/// the reason, so the form still goes through its normal cycle.
pub struct UnavailableUpload {
    reason: String,
}

impl UnavailableUpload {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl UploadApi for UnavailableUpload {
    async fn submit(&self, _request: SubmissionRequest) -> SubmissionOutcome {
        SubmissionOutcome::network(&self.reason)
    }
}

/// Mock transports for testing.
#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// What a mock transport was handed
    #[derive(Debug, Clone)]
    pub struct ReceivedUpload {
        pub file_name: String,
        pub contents: Vec<u8>,
    }

    /// Returns a fixed outcome and records what it was sent.
    pub struct MockUpload {
        outcome: SubmissionOutcome,
        calls: AtomicUsize,
        received: Mutex<Vec<ReceivedUpload>>,
    }

    impl MockUpload {
        pub fn returning(outcome: SubmissionOutcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
                received: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn received(&self) -> Vec<ReceivedUpload> {
            self.received.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UploadApi for MockUpload {
        async fn submit(&self, request: SubmissionRequest) -> SubmissionOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let file_name = request.file_name.clone();
            let contents = request.into_bytes().await.unwrap();
            self.received
                .lock()
                .unwrap()
                .push(ReceivedUpload { file_name, contents });
            self.outcome.clone()
        }
    }

    /// Panics mid-request, standing in for a transport bug.
    pub struct PanickingUpload;

    #[async_trait]
    impl UploadApi for PanickingUpload {
        async fn submit(&self, _request: SubmissionRequest) -> SubmissionOutcome {
            panic!("connection pool poisoned");
        }
    }
}
