mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Locations searched, in order, when no config path is given.
pub const DEFAULT_PATHS: &[&str] = &[
    "./relinfo.toml",
    "~/.config/relinfo/config.toml",
    "/etc/relinfo/config.toml",
];

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    match find_default_config() {
        Some(path) => {
            tracing::debug!("Using config file {:?}", path);
            load_config(&path)
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// First existing file among [`DEFAULT_PATHS`], tilde-expanded.
pub fn find_default_config() -> Option<PathBuf> {
    DEFAULT_PATHS
        .iter()
        .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
        .find(|p| p.exists())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.parser.max_input_length == 0 {
        anyhow::bail!("parser.max_input_length cannot be 0");
    }

    if let Some(year) = config.parser.current_year {
        validate_current_year(year)?;
    }

    config
        .rule_table()
        .context("Failed to compile vocabulary")?;

    Ok(())
}

/// Reject a pinned current year outside 1900..=9999.
pub fn validate_current_year(year: i32) -> Result<()> {
    if !(1900..=9999).contains(&year) {
        anyhow::bail!("parser.current_year {} is out of range", year);
    }
    Ok(())
}
