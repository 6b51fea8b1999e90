use serde::Deserialize;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::strategy::AxisPolicy;

/// Overrides the config file location.
pub const CONFIG_ENV_VAR: &str = "KNIGHT_CONFIG";

/// Optional `~/.knight/config.toml`.
///
/// ```toml
/// [search]
/// axis_policy = "sequential"
///
/// [log]
/// filter = "knight_engine=debug"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct KnightConfig {
    pub search: Option<SearchConfig>,
    pub log: Option<LogConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchConfig {
    /// "simultaneous" (default) or "sequential".
    #[serde(default)]
    pub axis_policy: AxisPolicy,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogConfig {
    /// `tracing` filter directive. `RUST_LOG` takes precedence.
    pub filter: Option<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl KnightConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// A missing file is `Ok(None)`, not an error.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// `KNIGHT_AXIS_POLICY`, then `[search].axis_policy`, then the default.
    #[must_use]
    pub fn axis_policy(config: Option<&Self>) -> AxisPolicy {
        AxisPolicy::from_env()
            .or_else(|| {
                config
                    .and_then(|cfg| cfg.search.as_ref())
                    .map(|search| search.axis_policy)
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log
            .as_ref()
            .and_then(|log| log.filter.as_deref())
            .map(str::trim)
            .filter(|filter| !filter.is_empty())
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".knight").join("config.toml"))
}
