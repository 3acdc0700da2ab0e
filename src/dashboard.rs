//! Opening the server dashboard in the system browser.

use reqwest::Url;

use crate::config::ServerConfig;
use crate::error::{Error, Result, ResultExt};

/// Resolve the dashboard URL for `server`.
pub fn dashboard_url(server: &ServerConfig) -> Result<Url> {
    server
        .dashboard_url()
        .with_context("resolving dashboard address")
}

/// Open `url` in a new browser window/tab. Nothing is observed back.
///
/// `open` may block while it spawns the platform launcher, so it runs on a
/// blocking thread.
pub async fn open_dashboard(url: Url) -> Result<()> {
    tracing::info!(%url, "Opening dashboard");
    tokio::task::spawn_blocking(move || {
        open::that(url.as_str()).map_err(|e| Error::browser(url.as_str(), e))
    })
    .await
    .map_err(|e| Error::TaskJoin(e.to_string()))?
}
