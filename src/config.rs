#[cfg(test)]
mod tests;

use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use home::home_dir;
use serde::Deserialize;
use serde_inline_default::serde_inline_default;
use thiserror::Error;
use toml;
use tracing::{debug, warn};

use crate::rawg::DEFAULT_BASE_URL;

/// Overrides `rawg.api_key` from the config file when set
pub const API_KEY_ENV: &str = "RAWG_API_KEY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Io(String, std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub rawg: Rawg,
}

#[serde_inline_default]
#[derive(Deserialize, Debug)]
pub struct Rawg {
    pub api_key: Option<String>,
    #[serde_inline_default(DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
}

impl Default for Rawg {
    fn default() -> Self {
        Rawg { api_key: None, base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl Config {
    /// The configured key, if any. A blank key counts as missing.
    pub fn api_key(&self) -> Option<&str> {
        self.rawg.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())
    }

    fn apply_env_key(&mut self, key: Option<String>) {
        if let Some(k) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using RAWG API key from {}", API_KEY_ENV);
            self.rawg.api_key = Some(k);
        }
    }
}

pub fn default_path() -> Option<PathBuf> {
    home_dir().map(|mut f| {
        f.push(".gamehub/config.toml");
        f
    })
}

pub fn parse(raw: &str) -> Result<Config> {
    Ok(toml::from_str(raw)?)
}

fn read_file(f: &Path) -> Result<Config> {
    match std::fs::read_to_string(f) {
        Ok(raw) => parse(&raw),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("No config file at {}; using defaults", f.display());
            Ok(Config::default())
        }
        Err(e) => Err(ConfigError::Io(f.display().to_string(), e)),
    }
}

/// Read config from the given file, or ~/.gamehub/config.toml. A missing file is not an error:
/// without an API key every fetch just comes back empty.
pub fn read(path: Option<&PathBuf>) -> Result<Config> {
    let mut conf = match path.cloned().or_else(default_path) {
        Some(f) => read_file(&f)?,
        None => {
            warn!("Could not determine home dir; using default config");
            Config::default()
        }
    };

    conf.apply_env_key(env::var(API_KEY_ENV).ok());

    if conf.api_key().is_none() {
        warn!("No RAWG API key configured; set rawg.api_key or {}", API_KEY_ENV);
    }

    Ok(conf)
}
