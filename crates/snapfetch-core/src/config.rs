use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_user_agent() -> String {
    concat!("snapfetch/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_filename() -> String {
    "download.bin".to_string()
}

/// Global configuration loaded from `~/.config/snapfetch/config.toml`.
/// Command-line flags override these values per invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapfetchConfig {
    /// Client identifier sent as `User-Agent` on every fetch.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Fetch timeout in seconds (hard bound on the whole transfer).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Output filename used when the caller does not name one.
    #[serde(default = "default_filename")]
    pub default_filename: String,
}

impl Default for SnapfetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            default_filename: default_filename(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("snapfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SnapfetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SnapfetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SnapfetchConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SnapfetchConfig::default();
        assert!(cfg.user_agent.starts_with("snapfetch/"));
        assert_eq!(cfg.timeout_secs, 60);
        assert_eq!(cfg.default_filename, "download.bin");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SnapfetchConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SnapfetchConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.user_agent, cfg.user_agent);
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
        assert_eq!(parsed.default_filename, cfg.default_filename);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            user_agent = "statute-mirror/2.0"
            timeout_secs = 15
            default_filename = "statutes.json"
        "#;
        let cfg: SnapfetchConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.user_agent, "statute-mirror/2.0");
        assert_eq!(cfg.timeout_secs, 15);
        assert_eq!(cfg.default_filename, "statutes.json");
    }

    #[test]
    fn config_toml_partial_falls_back_to_defaults() {
        let cfg: SnapfetchConfig = toml::from_str("timeout_secs = 5").unwrap();
        assert_eq!(cfg.timeout_secs, 5);
        assert!(cfg.user_agent.starts_with("snapfetch/"));
        assert_eq!(cfg.default_filename, "download.bin");
    }
}
