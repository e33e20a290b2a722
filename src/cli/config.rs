//! Config commands

use anyhow::Result;
use console::style;
use std::path::Path;

use mindcare::config::AppConfig;

/// Write the example config to `path`
pub fn init(path: &Path, force: bool) -> Result<()> {
    AppConfig::write_example(path, force)?;
    println!("{} Created {}", style("✓").green(), path.display());
    if let Some(user_path) = AppConfig::user_config_path() {
        println!(
            "  User-wide settings can go in {}",
            style(user_path.display()).dim()
        );
    }
    Ok(())
}

/// Print the effective configuration as TOML
pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    if let Err(e) = config.validate() {
        eprintln!("{} {}", style("warning:").yellow(), e);
    }
    Ok(())
}
