use crate::weather::Unit;
use serde::Deserialize;
use std::{fs::File, io, path::Path, time::Duration};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("error reading config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("error parsing config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Startup defaults for the dashboard. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub location: String,
    pub tick_interval_secs: u64,
    pub unit: Unit,
    pub dark_mode: bool,
    pub notifications: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: "South Africa, SA".to_string(),
            tick_interval_secs: Self::DEFAULT_TICK_SECS,
            unit: Unit::F,
            dark_mode: false,
            notifications: false,
        }
    }
}

impl Config {
    const PATH: &'static str = "./config.json";
    const DEFAULT_TICK_SECS: u64 = 10;
    /// Longest accepted interval; the timer deadline must not overflow `Instant`
    const MAX_TICK_SECS: u64 = 24 * 60 * 60;

    /// Load `./config.json`, falling back to defaults if it is missing or bad
    pub fn load() -> Self {
        match Self::load_from(Self::PATH) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                info!("No config file at `{}`, using defaults", Self::PATH);
                Self::default()
            }
            Err(err) => {
                warn!("{err}; using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading config from `{}`", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self =
            serde_json::from_reader(io::BufReader::new(file)).map_err(|source| {
                ConfigError::Parse {
                    path: path.display().to_string(),
                    source,
                }
            })?;
        if config.tick_interval_secs > Self::MAX_TICK_SECS {
            warn!(
                "tick_interval_secs {} exceeds {}, using {}",
                config.tick_interval_secs,
                Self::MAX_TICK_SECS,
                Self::DEFAULT_TICK_SECS
            );
        }
        Ok(config)
    }

    /// Interval between simulated weather updates. Zero or anything over a
    /// day means the default.
    pub fn tick_interval(&self) -> Duration {
        match self.tick_interval_secs {
            secs @ 1..=Self::MAX_TICK_SECS => Duration::from_secs(secs),
            _ => Duration::from_secs(Self::DEFAULT_TICK_SECS),
        }
    }
}
