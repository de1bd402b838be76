use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use iflry_config::SiteConfig;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "iflry.json";

/// Load iflry.json config from current directory.
pub fn load_config() -> Result<SiteConfig> {
    let path = PathBuf::from(CONFIG_FILE);
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE} not found. Run 'iflry init' first.");
    }

    let content = fs::read_to_string(&path).context("read iflry.json")?;
    let config: SiteConfig = serde_json::from_str(&content).context("parse iflry.json")?;
    Ok(config)
}

/// Load config from a specific path.
pub fn load_config_from_path(path: PathBuf) -> Result<SiteConfig> {
    if !path.exists() {
        anyhow::bail!("{CONFIG_FILE} not found at: {}", path.display());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let config: SiteConfig = serde_json::from_str(&content)
        .with_context(|| format!("parse config: {}", path.display()))?;
    Ok(config)
}

/// Load config from project root, with fallback to defaults.
pub fn load_config_or_default(project_root: Option<PathBuf>) -> Result<SiteConfig> {
    let config_path = match project_root {
        Some(root) => root.join(CONFIG_FILE),
        None => PathBuf::from(CONFIG_FILE),
    };

    if config_path.exists() {
        load_config_from_path(config_path)
    } else {
        Ok(SiteConfig::default())
    }
}
