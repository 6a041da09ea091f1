use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::base::DEFAULT_BASE_URL;

/// Global configuration loaded from `~/.config/lurl/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LurlConfig {
    /// Location of the hosting document when running inside a page-like environment.
    /// When set, relative references resolve against it instead of the fallback.
    #[serde(default)]
    pub document_url: Option<String>,
    /// Base for non-interactive use.
    #[serde(default = "default_fallback_base_url")]
    pub fallback_base_url: String,
}

fn default_fallback_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for LurlConfig {
    fn default() -> Self {
        Self {
            document_url: None,
            fallback_base_url: default_fallback_base_url(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lurl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LurlConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LurlConfig> {
    if !path.exists() {
        let default_cfg = LurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Read configuration from `path`; it must exist.
pub fn load_from(path: &Path) -> Result<LurlConfig> {
    let data = fs::read_to_string(path)?;
    let cfg: LurlConfig = toml::from_str(&data)?;
    Ok(cfg)
}
