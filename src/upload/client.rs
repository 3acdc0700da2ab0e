//! HTTP client for the upload endpoint.
//!
//! Sends the file as multipart form data (one part named `file`) and folds
//! every possible reply into a [`SubmissionOutcome`]. The endpoint contract:
//!
//! - 2xx with `{"message": "..."}` - success
//! - anything else that parses as JSON - server error, using `error` if present
//! - no reply, or a reply that isn't JSON - network error

use reqwest::multipart::{Form, Part};
use reqwest::{Body, StatusCode, Url};
use tokio_util::io::ReaderStream;

use super::domain::{
    FILE_FIELD, SERVER_ERROR_FALLBACK, SubmissionOutcome, SubmissionRequest, UploadError,
};
use crate::config::ServerConfig;

/// User agent sent with every upload
const USER_AGENT: &str = concat!("LogUploader/", env!("CARGO_PKG_VERSION"));

/// Upload endpoint client
pub struct UploadClient {
    http_client: reqwest::Client,
    upload_url: Url,
}

impl UploadClient {
    /// Create a client for the configured server
    pub fn new(server: &ServerConfig) -> Result<Self, UploadError> {
        let upload_url = server.upload_url()?;

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(server.connect_timeout());
        if let Some(timeout) = server.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            upload_url,
        })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    /// POST the file and classify the reply. Never fails: every failure
    /// mode is an outcome variant.
    pub async fn submit(&self, request: SubmissionRequest) -> SubmissionOutcome {
        let SubmissionRequest {
            file,
            file_name,
            length,
        } = request;

        tracing::debug!(
            file = %file_name,
            bytes = length,
            url = %self.upload_url,
            "Sending upload"
        );

        let body = Body::wrap_stream(ReaderStream::new(file));
        let form = Form::new().part(
            FILE_FIELD,
            Part::stream_with_length(body, length).file_name(file_name),
        );

        let response = match self
            .http_client
            .post(self.upload_url.clone())
            .multipart(form)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Upload request failed: {}", e);
                return SubmissionOutcome::network(describe_transport_error(&e));
            }
        };

        let status = response.status();
        match response.bytes().await {
            Ok(body) => interpret_response(status, &body),
            Err(e) => {
                tracing::warn!("Failed to read upload response body: {}", e);
                SubmissionOutcome::network(describe_transport_error(&e))
            }
        }
    }
}

/// Classify a completed HTTP exchange.
pub fn interpret_response(status: StatusCode, body: &[u8]) -> SubmissionOutcome {
    let body: serde_json::Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(%status, "Upload response is not JSON: {}", e);
            return SubmissionOutcome::network(format!("unreadable server response ({e})"));
        }
    };

    if status.is_success()
        && let Some(message) = non_empty_str(&body, "message")
    {
        return SubmissionOutcome::success(message);
    }

    let message = non_empty_str(&body, "error").unwrap_or(SERVER_ERROR_FALLBACK);
    tracing::info!(%status, "Server rejected upload: {}", message);
    SubmissionOutcome::server_error(message)
}

/// A string field that carries actual text; other shapes count as absent.
fn non_empty_str<'a>(body: &'a serde_json::Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(serde_json::Value::as_str)
        .filter(|text| !text.is_empty())
}

fn describe_transport_error(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        return "request timeout".to_string();
    }

    // reqwest's Display stops at the top-level error; the cause (refused,
    // DNS failure, reset) is further down the chain.
    let mut description = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        description.push_str(": ");
        description.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    description
}
