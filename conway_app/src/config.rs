//! Host settings loaded from `conway.toml`, with environment overrides.
//!
//! The file is optional; a missing file means defaults. `CONWAY_CONFIG` points
//! at a different file, `CONWAY_INTERVAL_MS` and `CONWAY_EVALUATOR` override
//! single fields.

use std::path::{Path, PathBuf};
use std::time::Duration;

use conway::EvaluatorKind;
use serde::Deserialize;

pub const DEFAULT_PATH: &str = "conway.toml";
pub const CONFIG_ENV: &str = "CONWAY_CONFIG";
const INTERVAL_ENV: &str = "CONWAY_INTERVAL_MS";
const EVALUATOR_ENV: &str = "CONWAY_EVALUATOR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Minimum time between automatic steps while running.
    pub interval_ms: u64,
    pub evaluator: EvaluatorKind,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
    /// Edge length of one cell on screen, in points.
    pub cell_size: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            interval_ms: 200,
            evaluator: EvaluatorKind::Sequential,
            live_color: [0, 200, 0],
            dead_color: [40, 40, 40],
            cell_size: 24.0,
        }
    }
}

impl AppConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid { field: "interval_ms", reason: "must be greater than zero".into() });
        }
        if !(self.cell_size.is_finite() && self.cell_size >= 2.0) {
            return Err(ConfigError::Invalid { field: "cell_size", reason: format!("{} is too small", self.cell_size) });
        }
        Ok(())
    }
}

/// Loads the configuration from `CONWAY_CONFIG` or `./conway.toml`.
pub fn load() -> Result<AppConfig, ConfigError> {
    let path = std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_PATH));
    load_from(&path, |key| std::env::var(key).ok())
}

/// Reads `path` if it exists, then applies overrides looked up through `env`.
pub fn load_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<AppConfig, ConfigError> {
    let mut cfg = if path.is_file() {
        let txt = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        toml::from_str::<AppConfig>(&txt)?
    } else {
        AppConfig::default()
    };

    if let Some(value) = env(INTERVAL_ENV) {
        cfg.interval_ms = value.trim().parse().map_err(|err: std::num::ParseIntError| ConfigError::Invalid {
            field: "interval_ms",
            reason: format!("{value:?}: {err}"),
        })?;
    }
    if let Some(value) = env(EVALUATOR_ENV) {
        cfg.evaluator = value.parse().map_err(|err: conway::ConwayError| ConfigError::Invalid {
            field: "evaluator",
            reason: err.to_string(),
        })?;
    }

    cfg.validate()?;
    Ok(cfg)
}
