//! Config inspection command.

use crate::config::{self, Config};

/// Print where the config lives and what is in effect
pub fn cmd_config(config: &Config) -> anyhow::Result<()> {
    match config::config_path() {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) => println!("Config file: {} (not created yet)", path.display()),
        None => println!("Config file: unavailable on this platform"),
    }
    println!();
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
