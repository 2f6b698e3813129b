//! Global configuration for symptrace (stored in ~/.config/symptrace/config.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SymptraceError};
use crate::graph::Algorithm;

const CONFIG_DIR: &str = "symptrace";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "SYMPTRACE_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct GlobalConfig {
    /// Strategy used when `--algorithm` is not given
    #[serde(default)]
    pub default_algorithm: Algorithm,

    /// Graph document loaded when `--graph` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph: Option<PathBuf>,

    /// Print the per-step history after a full run
    #[serde(default)]
    pub show_steps: bool,
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    SymptraceError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the global config, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            SymptraceError::Other(format!(
                "failed to read global config from {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut config: GlobalConfig = toml::from_str(&content).map_err(|e| {
            SymptraceError::Other(format!(
                "failed to parse global config from {}: {}",
                path.display(),
                e
            ))
        })?;

        // Relative graph paths are relative to the config file
        if let (Some(graph), Some(dir)) = (config.graph.as_mut(), path.parent()) {
            if graph.is_relative() {
                *graph = dir.join(&*graph);
            }
        }

        Ok(config)
    }
}
