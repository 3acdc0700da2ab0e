//! Command-line interface for log-uploader.
//!
//! This module provides headless commands for uploading a log file and
//! opening the dashboard without launching the GUI.

mod commands;

pub use commands::{Cli, Commands, run_command};
