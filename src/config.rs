use std::path::{Path, PathBuf};

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::metadata::DEFAULT_DATA_API_URL;
use crate::summarize::{DEFAULT_GROQ_URL, DEFAULT_MODEL};
use crate::youtube::DEFAULT_YOUTUBE_URL;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Optional settings from `config.toml`; unset keys fall back to built-in defaults
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub model: Option<String>,
    pub groq_base_url: Option<String>,
    pub youtube_api_base_url: Option<String>,
    pub youtube_base_url: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytsum/config.toml if it exists
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn model(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    pub fn groq_base_url(&self) -> &str {
        self.groq_base_url.as_deref().unwrap_or(DEFAULT_GROQ_URL)
    }

    pub fn youtube_api_base_url(&self) -> &str {
        self.youtube_api_base_url.as_deref().unwrap_or(DEFAULT_DATA_API_URL)
    }

    pub fn youtube_base_url(&self) -> &str {
        self.youtube_base_url.as_deref().unwrap_or(DEFAULT_YOUTUBE_URL)
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytsum")
        .join("config.toml")
}
