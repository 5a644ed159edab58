use crate::errors::ConfigError;
use crate::providers::llm::GenerateParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

fn default_temperature() -> Option<f32> {
    Some(0.0)
}

fn default_max_tokens() -> u32 {
    1024
}

/// YAML run configuration. Judges are "provider/model" strings; an empty
/// list is legal and yields a mean of 0 for every sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreConfig {
    pub version: u32,
    #[serde(default)]
    pub judges: Vec<String>,
    #[serde(default = "default_temperature")]
    pub temperature: Option<f32>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl ScoreConfig {
    pub fn params(&self) -> GenerateParams {
        GenerateParams {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

pub fn load_config(path: &Path) -> Result<ScoreConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;
    let cfg: ScoreConfig = serde_yaml::from_str(&raw)
        .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;
    if cfg.version != SUPPORTED_CONFIG_VERSION {
        return Err(ConfigError(format!(
            "unsupported config version {} (supported: {})",
            cfg.version, SUPPORTED_CONFIG_VERSION
        )));
    }
    Ok(cfg)
}

/// Write the annotated starter config shipped with the CLI.
pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, include_str!("../../../aha.yaml"))
        .map_err(|e| ConfigError(format!("failed to write sample config: {}", e)))?;
    Ok(())
}
