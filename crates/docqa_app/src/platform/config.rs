//! Front-end configuration, read from a RON file.
//!
//! Lookup order: `$DOCQA_CONFIG`, then `./docqa.ron`. A missing file means
//! defaults; a file that exists but does not parse is an error.
//! `$DOCQA_BASE_URL` overrides `base_url` after loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use docqa_client::{ApiError, ClientSettings, DEFAULT_BASE_URL};
use docqa_logging::{docqa_debug, LogDestination};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILENAME: &str = "docqa.ron";
const CONFIG_PATH_ENV: &str = "DOCQA_CONFIG";
const BASE_URL_ENV: &str = "DOCQA_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    #[default]
    File,
    Terminal,
    Both,
}

impl LogTarget {
    pub fn destination(self) -> LogDestination {
        match self {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn filter(self) -> LevelFilter {
        match self {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub base_url: String,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub log: LogTarget,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            log: LogTarget::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl AppConfig {
    /// Loads from the default location and applies environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));
        let config = Self::load_from(&path)?;
        Ok(config.with_base_url_override(std::env::var(BASE_URL_ENV).ok()))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                docqa_debug!("No config file at {:?}; using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        ron::from_str(&content).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        self
    }

    pub fn client_settings(&self) -> Result<ClientSettings, ApiError> {
        let mut settings = ClientSettings::with_base_url(&self.base_url)?;
        settings.connect_timeout = self.connect_timeout_secs.map(Duration::from_secs);
        settings.request_timeout = self.request_timeout_secs.map(Duration::from_secs);
        Ok(settings)
    }
}
