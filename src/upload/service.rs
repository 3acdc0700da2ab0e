//! One complete submission: read the file, send it, classify the reply.

use std::panic::AssertUnwindSafe;
use std::path::PathBuf;

use futures::FutureExt;

use super::domain::{SubmissionOutcome, SubmissionRequest};
use super::traits::UploadApi;

/// Upload the file at `path` through `api`, streaming its contents.
///
/// Resolves to exactly one outcome for every exit path, including an
/// unreadable file and a panic inside the transport, so the caller's
/// restore step always runs.
pub async fn submit_file<A>(api: &A, path: PathBuf) -> SubmissionOutcome
where
    A: UploadApi + ?Sized,
{
    let request = match SubmissionRequest::open(&path).await {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("{}", e);
            return SubmissionOutcome::network(e);
        }
    };

    tracing::info!(
        file = %request.file_name,
        bytes = request.length,
        "Submitting upload"
    );

    match AssertUnwindSafe(api.submit(request)).catch_unwind().await {
        Ok(outcome) => {
            tracing::info!(success = outcome.is_success(), "Upload finished: {}", outcome.message());
            outcome
        }
        Err(_) => {
            tracing::error!("Upload transport panicked");
            SubmissionOutcome::network("upload aborted unexpectedly")
        }
    }
}
