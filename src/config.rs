use crate::RoundscoreError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Default)]
pub struct RoundscoreConfig {
    #[serde(default)]
    pub hub: HubConfig,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct HubConfig {
    /// Hub base URL. Falls back to HF_ENDPOINT, then huggingface.co.
    pub endpoint: Option<String>,
    /// Download cache. Falls back to HF_HOME / the hub default.
    pub cache_dir: Option<PathBuf>,
    /// Access token. Falls back to the token stored by the hub CLI.
    pub token: Option<String>,
    #[serde(default)]
    pub progress: bool,
    /// Revision used when --revision is not given.
    pub revision: Option<String>,
}

pub const DEFAULT_REVISION: &str = "main";

impl HubConfig {
    /// CLI revision wins over config, config over "main".
    pub fn resolve_revision(&self, cli_revision: Option<&str>) -> String {
        cli_revision
            .or(self.revision.as_deref())
            .unwrap_or(DEFAULT_REVISION)
            .to_string()
    }
}

/// Load config from ROUNDSCORE_CONFIG env var, ~/.roundscore/config.toml, or defaults.
pub fn load_config() -> Result<RoundscoreConfig, RoundscoreError> {
    let path = config_path();
    match path {
        Some(p) if p.exists() => {
            let content = std::fs::read_to_string(&p)?;
            let config: RoundscoreConfig = toml::from_str(&content)
                .map_err(|e| RoundscoreError::Config(format!("{}: {e}", p.display())))?;
            validate_config(&config)?;
            log::debug!("loaded config from {}", p.display());
            Ok(config)
        }
        _ => Ok(RoundscoreConfig::default()),
    }
}

fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("ROUNDSCORE_CONFIG") {
        return Some(PathBuf::from(p));
    }
    let home = std::env::var("HOME").ok()?;
    Some(Path::new(&home).join(".roundscore").join("config.toml"))
}

fn validate_config(config: &RoundscoreConfig) -> Result<(), RoundscoreError> {
    if let Some(endpoint) = &config.hub.endpoint {
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(RoundscoreError::Config(format!(
                "hub.endpoint must be an http(s) URL, got {endpoint:?}"
            )));
        }
    }
    if config.hub.revision.as_deref().is_some_and(|r| r.trim().is_empty()) {
        return Err(RoundscoreError::Config("hub.revision must not be empty".into()));
    }
    Ok(())
}
