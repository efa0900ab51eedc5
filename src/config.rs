use crate::error::{PipelineError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub sheet: SheetConfig,
    #[serde(default)]
    pub content: ContentConfig,
}

#[derive(Debug, Deserialize)]
pub struct SheetConfig {
    /// Spreadsheet document id shared by both fetch strategies.
    pub spreadsheet_id: String,
    /// Environment variable holding the values-API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Per-request timeout; a slow source must not hang the caller.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContentConfig {
    /// Which source is authoritative for hero content. The legacy site had
    /// two divergent fetch paths; this makes the choice explicit.
    #[serde(default)]
    pub hero_source: HeroSource,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeroSource {
    #[default]
    Sheet,
    Persistence,
}

fn default_api_key_env() -> String {
    "SHEETS_API_KEY".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            PipelineError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }
}
