// src/config.rs
use crate::context::DEMO_DATA;
use crate::error::Result;
use crate::strategy::StrategyKind;
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_PREFIX: &str = "SORT_STRATEGY";
pub const CONFIG_PATH_VAR: &str = "SORT_STRATEGY_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "sort-strategy.toml";

/// Runtime settings for the `run` command
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Strategy used when none is given on the command line
    pub strategy: StrategyKind,
    /// Comma separated items sorted when none are given on the command line
    pub data: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            data: DEMO_DATA.join(","),
        }
    }
}

impl AppConfig {
    /// Load from the default file location and `SORT_STRATEGY_*` variables
    pub fn load() -> Result<Self> {
        let path = std::env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        Self::load_from(&path, ENV_PREFIX)
    }

    /// Layer defaults, an optional file at `path` and `<prefix>_*` variables
    pub fn load_from(path: &Path, env_prefix: &str) -> Result<Self> {
        let defaults = Self::default();
        debug!("Loading configuration from {} with prefix {}", path.display(), env_prefix);

        let settings = Config::builder()
            .set_default("strategy", defaults.strategy.to_string())?
            .set_default("data", defaults.data)?
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix(env_prefix))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Items from `data`, trimmed, with empty entries skipped
    pub fn items(&self) -> Vec<String> {
        self.data
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}
