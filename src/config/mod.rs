//! Configuration module for postdeck
//!
//! Settings are layered: built-in defaults, then the TOML file in the user's
//! config directory, then `POSTDECK_*` environment variables. Command-line
//! flags are merged on top by the binary.

mod setup;

pub use setup::interactive_init;

use crate::api::{DEFAULT_ENDPOINT, normalize_endpoint};
use crate::logging::normalize_level;
use crate::view::DEFAULT_PAGE_SIZE;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Keys accepted by [`PostdeckConfig::get`] and [`PostdeckConfig::set`]
pub const CONFIG_KEYS: [&str; 7] = [
    "endpoint",
    "page_size",
    "debounce_ms",
    "timeout_secs",
    "discard_stale_responses",
    "log_level",
    "quiet",
];

const ENV_PREFIX: &str = "POSTDECK";

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PostdeckConfig {
    /// Search endpoint queried with `q`, `skip` and `limit`
    pub endpoint: String,

    /// Posts requested per page
    pub page_size: u32,

    /// Quiet period before a debounced fetch fires, in milliseconds
    pub debounce_ms: u64,

    /// HTTP timeout, in seconds
    pub timeout_secs: u64,

    /// Ignore responses older than the newest one already applied
    pub discard_stale_responses: bool,

    /// Log level for the log file; build-mode default when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Suppress informational output by default
    pub quiet: bool,
}

impl Default for PostdeckConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: 500,
            timeout_secs: 10,
            discard_stale_responses: true,
            log_level: None,
            quiet: false,
        }
    }
}

impl PostdeckConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("postdeck").join("config.toml"))
    }

    /// Load configuration from `path`, then `POSTDECK_*` overrides
    ///
    /// A missing file is not an error; defaults (plus environment overrides)
    /// are returned and nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed,
    /// or if an environment override has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, Some(Environment::with_prefix(ENV_PREFIX).try_parsing(true)))
    }

    /// Load only what is stored in `path`, ignoring the environment
    ///
    /// Used when the file is about to be rewritten, so environment overrides
    /// are not persisted by accident.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    fn load_with_env(path: &Path, env: Option<Environment>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false));
        if let Some(env) = env {
            builder = builder.add_source(env);
        }
        let settings = builder.build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        log::debug!(
            "event=config_loaded module=config path={} exists={}",
            path.display(),
            path.exists()
        );
        Ok(config)
    }

    /// Save configuration to `path`, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the
    /// configuration cannot be serialized, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Debounce delay as a [`Duration`]
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// HTTP timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Read a setting as text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `key` is not one of [`CONFIG_KEYS`].
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "endpoint" => self.endpoint.clone(),
            "page_size" => self.page_size.to_string(),
            "debounce_ms" => self.debounce_ms.to_string(),
            "timeout_secs" => self.timeout_secs.to_string(),
            "discard_stale_responses" => self.discard_stale_responses.to_string(),
            "log_level" => self.log_level.clone().unwrap_or_default(),
            "quiet" => self.quiet.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Validate and apply one setting
    ///
    /// An empty `log_level` resets it to the build-mode default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `key` is unknown or `value` is not valid for it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        match key {
            "endpoint" => {
                let url = normalize_endpoint(value)
                    .map_err(|e| ConfigError::Message(e.to_string()))?;
                self.endpoint = url.to_string();
            }
            "page_size" => self.page_size = parse_positive(key, value)?,
            "debounce_ms" => {
                self.debounce_ms = value.parse().map_err(|_| invalid_value(key, value, "a number of milliseconds"))?;
            }
            "timeout_secs" => self.timeout_secs = parse_positive(key, value)?,
            "discard_stale_responses" => self.discard_stale_responses = parse_bool(key, value)?,
            "log_level" => {
                self.log_level = if value.is_empty() {
                    None
                } else {
                    let level = normalize_level(value)
                        .map_err(|e| ConfigError::Message(e.to_string()))?;
                    Some(level.to_string())
                };
            }
            "quiet" => self.quiet = parse_bool(key, value)?,
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

impl PostdeckConfig {
    /// Apply the same rules as [`set`](Self::set) to values that came from
    /// the file or the environment
    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(invalid_value("page_size", "0", "a positive number"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid_value("timeout_secs", "0", "a positive number"));
        }
        normalize_endpoint(&self.endpoint).map_err(|e| ConfigError::Message(e.to_string()))?;
        if let Some(level) = &self.log_level {
            normalize_level(level).map_err(|e| ConfigError::Message(e.to_string()))?;
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

fn invalid_value(key: &str, value: &str, expected: &str) -> ConfigError {
    ConfigError::Message(format!("Invalid value for {key}: '{value}'. Expected {expected}"))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value
        .parse()
        .map_err(|_| invalid_value(key, value, "'true' or 'false'"))
}

fn parse_positive<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + From<u8>,
{
    match value.parse::<T>() {
        Ok(n) if n >= T::from(1) => Ok(n),
        _ => Err(invalid_value(key, value, "a positive number")),
    }
}
