//! Runtime configuration for hosts embedding the core.
//!
//! Priority: explicit value > environment variable > default.

use crate::logging::default_log_level;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "TASKBOARD_DATA_DIR";
pub const LOG_LEVEL_ENV: &str = "TASKBOARD_LOG_LEVEL";
pub const DEFAULT_DB_FILE_NAME: &str = "taskboard.sqlite3";
const DEFAULT_DATA_DIR_NAME: &str = ".taskboard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
    pub db_file_name: String,
    pub log_level: String,
}

impl CoreConfig {
    /// Config rooted at `data_dir` with default file name and log level.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            db_file_name: DEFAULT_DB_FILE_NAME.to_string(),
            log_level: default_log_level().to_string(),
        }
    }

    /// Resolves config from environment variables with defaults.
    ///
    /// Without `TASKBOARD_DATA_DIR` the data dir is `.taskboard` under the
    /// user's home directory.
    ///
    /// # Errors
    /// - Neither `TASKBOARD_DATA_DIR` nor a home directory is available.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok(), dirs::home_dir())
    }

    fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        home_dir: Option<PathBuf>,
    ) -> Result<Self, String> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = match non_empty(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir.trim()),
            None => home_dir
                .map(|home| home.join(DEFAULT_DATA_DIR_NAME))
                .ok_or_else(|| {
                    format!("cannot determine home directory; set {DATA_DIR_ENV}")
                })?,
        };

        let mut config = Self::new(data_dir);
        if let Some(level) = non_empty(LOG_LEVEL_ENV) {
            config.log_level = level.trim().to_string();
        }
        Ok(config)
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(&self.db_file_name)
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
