//! Check command implementation
//!
//! Prints the effective configuration after file and environment overrides.

use std::path::Path;

use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Render the effective configuration as TOML.
pub fn render(config: &CliConfig) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

/// Run the check command
pub fn run(config: &CliConfig, source: &Path) -> Result<()> {
    info!("Checking configuration...");
    if source.exists() {
        info!("  Loaded from: {}", source.display());
    } else {
        info!("  {} not found, using defaults", source.display());
    }
    info!("  Worker threads: {}", rayon::current_num_threads());

    println!("{}", render(config)?);

    info!("Configuration is valid");
    Ok(())
}
