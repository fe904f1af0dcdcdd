use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::logic::catalog::Catalog;

#[derive(Debug, Deserialize)]
pub struct Config {
    /// API root, e.g. `https://host/api`; resource endpoints live under `/resources`
    pub base_url: String,
    #[serde(default)]
    pub vim_mode: bool,
    /// Command used to open a downloaded preview, e.g. `xdg-open` or `zathura`
    #[serde(default)]
    pub open_command: Option<String>,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub catalog: Catalog,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Config {
    /// Defaults for everything but the base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            vim_mode: false,
            open_command: None,
            request_timeout_secs: default_request_timeout_secs(),
            catalog: Catalog::default(),
        }
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(text).context("Invalid config file")?;
        if config.base_url.trim().is_empty() {
            anyhow::bail!("Config key base_url must not be empty");
        }
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
    }

    /// Zero disables the timeout
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }
}

/// Where a config file is expected when none is given on the command line
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("resadmin").join("config.yaml"))
}

/// Determine the config file path with fallback logic.
///
/// Returns `Ok(None)` when no file exists and `allow_missing` is set
/// (the base URL was supplied on the command line).
pub fn find_config_path(cli_path: Option<&str>, allow_missing: bool) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_path) = default_config_path() {
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    if allow_missing {
        return Ok(None);
    }

    let expected_path = default_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.config/resadmin/config.yaml".to_string());

    anyhow::bail!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location, or --base-url <url> to run without one.",
        expected_path
    )
}
