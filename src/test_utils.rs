//! Test utilities and fixtures shared across modules.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{server_config, temp_log_file};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let (path, _dir) = temp_log_file("access.log", "GET / 200\n");
//!     let client = UploadClient::new(&server_config("http://127.0.0.1:8000")).unwrap();
//!     // ... test logic
//! }
//! ```

use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::ServerConfig;

/// Writes `contents` to a file called `name` in a fresh temp directory.
///
/// Keep the returned `TempDir` alive for the duration of the test; the file
/// is deleted when it is dropped.
pub fn temp_log_file(name: &str, contents: &str) -> (PathBuf, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write temp log file");
    (path, dir)
}

/// Server config pointing at `base_url` with default paths and timeouts.
pub fn server_config(base_url: &str) -> ServerConfig {
    ServerConfig {
        base_url: base_url.to_string(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_log_file_has_contents() {
        let (path, _dir) = temp_log_file("x.log", "line\n");
        assert_eq!(std::fs::read_to_string(path).unwrap(), "line\n");
    }

    #[test]
    fn test_server_config_keeps_default_paths() {
        let config = server_config("http://example.test");
        assert_eq!(config.base_url, "http://example.test");
        assert_eq!(config.upload_path, "/upload/");
    }
}
