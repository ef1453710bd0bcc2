use std::path::PathBuf;

use log::LevelFilter;

pub const DATA_DIR_VAR: &str = "GYMBOOK_DATA_DIR";
pub const LOG_VAR: &str = "GYMBOOK_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from variables provided by `lookup`.
    ///
    /// Blank values are treated like unset ones.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|value: &String| !value.trim().is_empty());

        let data_dir = match var(DATA_DIR_VAR) {
            Some(dir) => PathBuf::from(dir.trim()),
            None => dirs::data_dir()
                .map(|dir| dir.join("gymbook"))
                .ok_or(ConfigError::NoDataDir)?,
        };

        let log_level = match var(LOG_VAR) {
            Some(level) => level
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::InvalidLogLevel(level))?,
            None => LevelFilter::Info,
        };

        Ok(Self {
            data_dir,
            log_level,
        })
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no data directory found, set GYMBOOK_DATA_DIR")]
    NoDataDir,
    #[error("invalid log level {0:?}")]
    InvalidLogLevel(String),
}
