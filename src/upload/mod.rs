//! Log file upload: submission state machine and server client.
//!
//! # Architecture
//!
//! - **Domain** (`domain.rs`) - selection state, request and outcome types
//! - **Controller** (`controller.rs`) - the submit control state machine,
//!   free of any GUI or network code so it can be driven from tests
//! - **Client** (`client.rs`) - multipart HTTP client for the upload endpoint
//!   and the response classification rules
//! - **Traits** (`traits.rs`) - `UploadApi` seam for mocking the transport
//! - **Service** (`service.rs`) - reads the file and runs one submission,
//!   always yielding exactly one outcome
//!
//! # Usage
//!
//! ```ignore
//! let mut controller = UploadController::new();
//! controller.on_selection_changed(Some(PathBuf::from("access.log")));
//!
//! if let Some(pending) = controller.on_submit() {
//!     let outcome = submit_file(&client, pending.path).await;
//!     if let Some(outcome) = controller.on_submission_finished(pending.id, outcome) {
//!         println!("{}", outcome.message());
//!     }
//! }
//! ```

pub mod client;
pub mod controller;
pub mod domain;
pub mod service;
pub mod traits;

pub use client::UploadClient;
pub use controller::{PendingSubmission, SubmissionId, SubmitControl, UploadController};
pub use domain::{SelectionState, SubmissionOutcome, SubmissionRequest, UploadError};
pub use service::submit_file;
pub use traits::{UnavailableUpload, UploadApi};
