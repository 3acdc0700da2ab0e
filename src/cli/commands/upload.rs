//! Headless upload command.

use std::path::Path;
use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::{Error, ResultExt};
use crate::upload::{self, SubmissionOutcome, UploadClient};

/// Upload `file` and print the outcome. Fails (exit code 1) unless the
/// server accepted the file.
pub fn cmd_upload(rt: &Runtime, config: &Config, file: &Path) -> anyhow::Result<()> {
    let client = UploadClient::new(&config.server)
        .map_err(Error::from)
        .with_context("preparing upload client")?;
    println!("Uploading {} to {}", file.display(), client.upload_url());

    let outcome = rt.block_on(upload::submit_file(&client, file.to_path_buf()));
    report(&outcome)
}

fn report(outcome: &SubmissionOutcome) -> anyhow::Result<()> {
    match outcome {
        SubmissionOutcome::Success { message } => {
            println!("✓ {}", message);
            Ok(())
        }
        SubmissionOutcome::ServerError { message } | SubmissionOutcome::NetworkError { message } => {
            anyhow::bail!("{}", message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{server_config, temp_log_file};
    use httpmock::prelude::*;

    #[test]
    fn test_report_success_is_ok() {
        assert!(report(&SubmissionOutcome::success("Processed")).is_ok());
    }

    #[test]
    fn test_report_failure_carries_message() {
        let err = report(&SubmissionOutcome::server_error("Bad file")).unwrap_err();
        assert_eq!(err.to_string(), "Bad file");
    }

    #[test]
    fn test_cmd_upload_against_mock_server() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/upload/");
            then.status(200)
                .json_body(serde_json::json!({ "message": "File \"a.log\" processed. Loaded 1 records." }));
        });

        let (path, _dir) = temp_log_file("a.log", "line\n");
        let config = Config {
            server: server_config(&server.base_url()),
            ..Default::default()
        };
        let rt = Runtime::new().unwrap();

        cmd_upload(&rt, &config, &path).unwrap();
        mock.assert();
    }

    #[test]
    fn test_cmd_upload_missing_file_fails() {
        let config = Config {
            server: server_config("http://127.0.0.1:1"),
            ..Default::default()
        };
        let rt = Runtime::new().unwrap();

        let err = cmd_upload(&rt, &config, Path::new("/definitely/not/here.log")).unwrap_err();
        assert!(err.to_string().starts_with("Network error: "));
    }
}
