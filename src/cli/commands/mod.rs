//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `upload`: Headless file submission
//! - `dashboard`: Open the server dashboard
//! - `config`: Show the effective configuration

mod config;
mod dashboard;
mod upload;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::{Config, Overrides};

pub use config::cmd_config;
pub use dashboard::cmd_dashboard;
pub use upload::cmd_upload;

/// Log Uploader CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Processing server base URL (overrides the config file)
    #[arg(long, global = true, env = "LOG_UPLOADER_SERVER")]
    pub server: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Per-run settings taken from the command line
    pub fn overrides(&self) -> Overrides {
        Overrides {
            server: self.server.clone(),
        }
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Upload a log file and print the server's answer
    Upload {
        /// Path to the log file
        file: PathBuf,
    },
    /// Open the server dashboard in the browser
    Dashboard,
    /// Show the config file location and effective settings
    Config,
}

/// Run the specified CLI command.
///
/// Returns `Ok(true)` if a command was run, `Ok(false)` if no command was specified
/// (meaning the GUI should launch).
pub fn run_command(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    let Some(command) = &cli.command else {
        return Ok(false);
    };

    let rt = Runtime::new()?;
    match command {
        Commands::Upload { file } => cmd_upload(&rt, config, file)?,
        Commands::Dashboard => cmd_dashboard(&rt, config)?,
        Commands::Config => cmd_config(config)?,
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_launches_gui() {
        let cli = Cli::try_parse_from(["log-uploader"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!run_command(&cli, &Config::default()).unwrap());
    }

    #[test]
    fn test_parses_upload_with_server_override() {
        let cli = Cli::try_parse_from([
            "log-uploader",
            "upload",
            "access.log",
            "--server",
            "http://logs.local:9000",
        ])
        .unwrap();

        assert!(matches!(&cli.command, Some(Commands::Upload { file }) if file == &PathBuf::from("access.log")));

        let config = cli.overrides().apply(&Config::default());
        assert_eq!(config.server.base_url, "http://logs.local:9000");
    }

    #[test]
    fn test_upload_requires_file() {
        assert!(Cli::try_parse_from(["log-uploader", "upload"]).is_err());
    }
}
