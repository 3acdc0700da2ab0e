//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\log-uploader\config.toml
//! - macOS: ~/Library/Application Support/log-uploader/config.toml
//! - Linux: ~/.config/log-uploader/config.toml
//!
//! The file is human-readable and editable. It is loaded once at startup;
//! the GUI writes it back when the remembered browse directory changes.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Processing server endpoints
    pub server: ServerConfig,

    /// Window/UI preferences
    pub ui: UiConfig,
}

/// Where the processing server lives and how to talk to it
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Scheme, host and port of the server
    pub base_url: String,

    /// Path of the multipart upload endpoint
    pub upload_path: String,

    /// Path of the dashboard opened in the browser
    pub dashboard_path: String,

    /// TCP connect timeout
    pub connect_timeout_secs: u64,

    /// Overall request timeout. Unset means the upload may take as long as
    /// the server needs to process the file.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            upload_path: "/upload/".to_string(),
            dashboard_path: "/dashboard/".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    /// Full URL of the upload endpoint
    pub fn upload_url(&self) -> Result<Url, ConfigError> {
        self.endpoint(&self.upload_path)
    }

    /// Full URL of the dashboard
    pub fn dashboard_url(&self) -> Result<Url, ConfigError> {
        self.endpoint(&self.dashboard_path)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        let base = Url::parse(&self.base_url)
            .map_err(|e| ConfigError::InvalidUrl(self.base_url.clone(), e.to_string()))?;
        base.join(path)
            .map_err(|e| ConfigError::InvalidUrl(path.to_string(), e.to_string()))
    }
}

/// UI preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Directory the file dialog opens in (last used)
    pub last_directory: Option<PathBuf>,
}

/// Settings given on the command line for this run only.
///
/// They shape the effective config but are never written back to disk.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Replaces `server.base_url`
    pub server: Option<String>,
}

impl Overrides {
    /// The config to run with: `stored` plus these overrides
    pub fn apply(&self, stored: &Config) -> Config {
        let mut effective = stored.clone();
        if let Some(server) = &self.server {
            tracing::debug!(%server, "Server overridden from command line");
            effective.server.base_url = server.clone();
        }
        effective
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("log-uploader"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    load_from(&path)
}

/// Load configuration from an explicit path, falling back to defaults
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let path = config_path().ok_or(ConfigError::NoConfigDir)?;
    save_to(config, &path)
}

/// Save configuration to an explicit path
///
/// Each call writes its own temp file in the target directory and renames
/// it over `path`, so concurrent saves never share an intermediate file.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    let mut temp =
        tempfile::NamedTempFile::new_in(dir).map_err(|e| ConfigError::Write(dir.to_path_buf(), e))?;
    temp.write_all(contents.as_bytes())
        .map_err(|e| ConfigError::Write(temp.path().to_path_buf(), e))?;
    temp.persist(path).map_err(|e| {
        ConfigError::Rename(e.file.path().to_path_buf(), path.to_path_buf(), e.error)
    })?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

/// Save configuration asynchronously (for use in Iced tasks)
pub async fn save_async(config: Config) -> Result<(), ConfigError> {
    tokio::task::spawn_blocking(move || save(&config))
        .await
        .map_err(|e| ConfigError::TaskJoin(e.to_string()))?
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),

    #[error("Invalid server URL {0}: {1}")]
    InvalidUrl(String, String),

    #[error("Task join error: {0}")]
    TaskJoin(String),
}

// ============================================================================
// Tests
// ============================================================================
