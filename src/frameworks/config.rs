use crate::domain::tuning::GameTuning;
use std::{
    env, fmt,
    path::{Path, PathBuf},
    time::Duration,
};

// Runtime constants (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;
pub const WORLD_BROADCAST_CAPACITY: usize = 128;

pub fn tick_interval() -> Duration {
    let millis = env::var("TICK_INTERVAL_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(1000 / 60);
    Duration::from_millis(millis)
}

pub fn snapshot_every_ticks() -> u64 {
    env::var("SNAPSHOT_EVERY_TICKS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|v| *v > 0)
        .unwrap_or(1)
}

pub fn tuning_path() -> Option<PathBuf> {
    env::var_os("GAME_TUNING_PATH")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[derive(Debug)]
pub enum ConfigError {
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read tuning file {}: {source}", path.display())
            }
            ConfigError::Parse(e) => write!(f, "failed to parse tuning: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn parse_tuning(text: &str) -> Result<GameTuning, ConfigError> {
    toml::from_str(text).map_err(ConfigError::Parse)
}

/// Loads gameplay tuning from `path`, or the built-in defaults when no path is set.
pub fn load_tuning(path: Option<&Path>) -> Result<GameTuning, ConfigError> {
    let Some(path) = path else {
        return Ok(GameTuning::default());
    };

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tuning(&text)
}
