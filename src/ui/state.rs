//! Application state.

use std::sync::Arc;

use crate::config::{Config, Overrides};
use crate::upload::{UnavailableUpload, UploadApi, UploadClient, UploadController};

use super::toast::ToastStack;

/// Everything the window renders from, owned by the application
pub struct UploaderState {
    /// Effective settings for this run
    pub config: Config,
    /// Settings as loaded from disk, written back on save
    pub stored: Config,
    pub api: Arc<dyn UploadApi>,
    pub controller: UploadController,
    pub toasts: ToastStack,
    /// A file is being dragged over the window
    pub drop_hover: bool,
}

impl UploaderState {
    /// Build the state and its HTTP client from `stored` with `overrides`
    /// applied.
    ///
    /// A client that cannot be built (bad base URL, TLS backend failure)
    /// does not stop the window from opening; submissions then fail with
    /// the returned reason, which is also the startup warning to show.
    pub fn new(stored: Config, overrides: &Overrides) -> (Self, Option<String>) {
        let server = overrides.apply(&stored).server;
        let (api, startup_error): (Arc<dyn UploadApi>, _) = match UploadClient::new(&server) {
            Ok(client) => {
                tracing::info!(url = %client.upload_url(), "Upload endpoint ready");
                (Arc::new(client), None)
            }
            Err(e) => {
                tracing::error!("Cannot build upload client: {}", e);
                let reason = e.to_string();
                (
                    Arc::new(UnavailableUpload::new(reason.clone())),
                    Some(reason),
                )
            }
        };

        (Self::with_api(stored, overrides, api), startup_error)
    }

    /// State around an explicit transport
    pub fn with_api(stored: Config, overrides: &Overrides, api: Arc<dyn UploadApi>) -> Self {
        Self {
            config: overrides.apply(&stored),
            stored,
            api,
            controller: UploadController::new(),
            toasts: ToastStack::new(),
            drop_hover: false,
        }
    }
}

impl std::fmt::Debug for UploaderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploaderState")
            .field("config", &self.config)
            .field("stored", &self.stored)
            .field("controller", &self.controller)
            .field("toasts", &self.toasts.len())
            .field("drop_hover", &self.drop_hover)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::server_config;

    #[test]
    fn test_new_with_valid_server_has_no_startup_error() {
        let config = Config {
            server: server_config("http://127.0.0.1:8000"),
            ..Default::default()
        };
        let (state, startup_error) = UploaderState::new(config, &Overrides::default());

        assert!(startup_error.is_none());
        assert!(!state.controller.submit_control().is_enabled());
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_new_with_bad_server_reports_reason() {
        let config = Config {
            server: server_config("not a url"),
            ..Default::default()
        };
        let (_state, startup_error) = UploaderState::new(config, &Overrides::default());

        assert!(startup_error.unwrap().contains("not a url"));
    }

    #[test]
    fn test_override_changes_effective_config_only() {
        let overrides = Overrides {
            server: Some("http://127.0.0.1:9000".to_string()),
        };
        let (state, startup_error) = UploaderState::new(Config::default(), &overrides);

        assert!(startup_error.is_none());
        assert_eq!(state.config.server.base_url, "http://127.0.0.1:9000");
        assert_eq!(state.stored.server.base_url, Config::default().server.base_url);
    }
}
