//! Log Uploader - send log files to the processing server.
//!
//! A small desktop client: pick (or drop) a log file, submit it to the
//! server's upload endpoint, and see the server's answer as a toast. The
//! same submission is available headless through the `upload` command.

// Hide console window on Windows when running as GUI
// CLI commands will attach to the parent console
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
#[cfg(test)]
pub mod test_utils;
pub mod ui;
pub mod upload;

use clap::Parser;
use iced::{Theme, application, window};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use ui::LogUploader;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // If running CLI commands on Windows, attach to console for output
    #[cfg(target_os = "windows")]
    if args.command.is_some() {
        attach_console();
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("log_uploader=info".parse()?))
        .init();

    // The stored config is what the GUI writes back; overrides only apply to this run
    let stored = config::load();
    let overrides = args.overrides();

    // Try to run a CLI command
    if cli::run_command(&args, &overrides.apply(&stored))? {
        return Ok(());
    }

    // No command specified, launch the GUI
    application("Log Uploader", LogUploader::update, LogUploader::view)
        .subscription(LogUploader::subscription)
        .theme(|_| Theme::Dark)
        .window(window::Settings {
            size: iced::Size::new(640.0, 480.0),
            min_size: Some(iced::Size::new(480.0, 400.0)),
            ..Default::default()
        })
        .run_with(move || LogUploader::new(stored, overrides))
        .map_err(|e| anyhow::anyhow!("GUI Error: {}", e))
}

/// Attach to parent console on Windows for CLI output.
/// This is needed because windows_subsystem = "windows" detaches from console.
#[cfg(target_os = "windows")]
fn attach_console() {
    use windows_sys::Win32::System::Console::{ATTACH_PARENT_PROCESS, AttachConsole};
    unsafe {
        // No parent console means no output, which is fine for a GUI launch
        let _ = AttachConsole(ATTACH_PARENT_PROCESS);
    }
}
