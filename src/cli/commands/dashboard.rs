//! Dashboard command.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::dashboard;

/// Open the server dashboard in the default browser
pub fn cmd_dashboard(rt: &Runtime, config: &Config) -> anyhow::Result<()> {
    let url = dashboard::dashboard_url(&config.server)?;
    println!("Opening {}", url);
    rt.block_on(dashboard::open_dashboard(url))?;
    Ok(())
}
