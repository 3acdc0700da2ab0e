//! Application-wide error types.
//!
//! Subsystems define their own `thiserror` enums ([`UploadError`],
//! [`ConfigError`]); this module aggregates them for code that crosses
//! subsystem boundaries. CLI/main uses `anyhow` on top of this.
//!
//! Upload *outcomes* are deliberately not errors: a failed submission is a
//! normal [`SubmissionOutcome`](crate::upload::SubmissionOutcome) that ends
//! up in a toast. The types here cover the things that stop an operation
//! from starting at all (bad config, unreadable file, no browser).
//!
//! [`UploadError`]: crate::upload::UploadError
//! [`ConfigError`]: crate::config::ConfigError

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Upload setup error
    #[error("Upload error: {0}")]
    Upload(#[from] crate::upload::UploadError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// The system browser could not be launched
    #[error("Could not open {url} in a browser: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// Blocking helper thread failed
    #[error("Background task failed: {0}")]
    TaskJoin(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Create a browser launch error.
    pub fn browser(url: impl Into<String>, source: std::io::Error) -> Self {
        Self::Browser {
            url: url.into(),
            source,
        }
    }

    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Io(e).context(ctx))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, crate::config::ConfigError> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| Error::Config(e).context(ctx))
    }
}
