use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Global configuration loaded from `~/.config/vlf/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VlfConfig {
    /// Connect timeout in seconds for each transfer.
    pub connect_timeout_secs: u64,
    /// Optional cap on a whole transfer in seconds (None = no cap; large
    /// files on slow links are allowed to take as long as they take).
    #[serde(default)]
    pub transfer_timeout_secs: Option<u64>,
    /// Maximum number of redirects to follow per transfer.
    pub max_redirects: u32,
    /// Optional User-Agent header (None = libcurl default).
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for VlfConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            transfer_timeout_secs: None,
            max_redirects: 10,
            user_agent: None,
        }
    }
}

impl VlfConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn transfer_timeout(&self) -> Option<Duration> {
        self.transfer_timeout_secs.map(Duration::from_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vlf")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<VlfConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = VlfConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: VlfConfig = toml::from_str(&data)?;
    Ok(cfg)
}
