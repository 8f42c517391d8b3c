use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use log::LevelFilter;

use base::helpers::validate_date_format;

use crate::view::DEFAULT_DATE_FORMAT;

pub const TRACKER_ENV_FILE: &str = "tracker.env";

pub const DB_PATH_ENV: &str = "ORDER_TRACKER_DB_PATH";
pub const DATE_FORMAT_ENV: &str = "ORDER_TRACKER_DATE_FORMAT";
pub const LOG_CONFIG_ENV: &str = "ORDER_TRACKER_LOG_CONFIG";
pub const LOG_FILE_ENV: &str = "ORDER_TRACKER_LOG_FILE";
pub const LOG_LEVEL_ENV: &str = "ORDER_TRACKER_LOG_LEVEL";

pub const DEFAULT_DB_PATH: &str = "order_tracker.json";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// A log4rs YAML file. Takes precedence over the other settings.
    pub config_file: Option<PathBuf>,
    pub file: Option<PathBuf>,
    pub level: LevelFilter,
}

impl Default for LogSettings {
    fn default() -> Self {
        LogSettings {
            config_file: None,
            file: None,
            level: DEFAULT_LOG_LEVEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub db_path: PathBuf,
    pub date_format: String,
    pub log: LogSettings,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        TrackerConfig {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            date_format: String::from(DEFAULT_DATE_FORMAT),
            log: Default::default(),
        }
    }
}

impl TrackerConfig {
    /// Reads the process environment, after `tracker.env` has been loaded
    /// into it.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| dotenv::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(db_path) = lookup(DB_PATH_ENV) {
            config.db_path = PathBuf::from(db_path);
        }

        if let Some(date_format) = lookup(DATE_FORMAT_ENV) {
            config = config.with_date_format(&date_format)?;
        }

        config.log.config_file = lookup(LOG_CONFIG_ENV).map(PathBuf::from);
        config.log.file = lookup(LOG_FILE_ENV).map(PathBuf::from);

        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.log.level = LevelFilter::from_str(&level)
                .context(format!("Invalid log level: {}", level))?;
        }

        Ok(config)
    }

    pub fn with_db_path<P: Into<PathBuf>>(mut self, db_path: P) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn with_date_format(mut self, date_format: &str) -> Result<Self> {
        validate_date_format(date_format)?;
        self.date_format = String::from(date_format);
        Ok(self)
    }
}
