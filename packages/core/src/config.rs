//! Crate configuration
//!
//! Defaults for the path cache and for mappers. Load from JSON or from the
//! `DENDRO_*` environment variables, validate, then [`Config::install`] to
//! resize the global path cache.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::path::{cache::DEFAULT_CAPACITY, global_cache};

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Environment variable overriding [`Config::path_cache_capacity`]
pub const ENV_PATH_CACHE_CAPACITY: &str = "DENDRO_PATH_CACHE_CAPACITY";
/// Environment variable overriding [`Config::remove_empty`]
pub const ENV_REMOVE_EMPTY: &str = "DENDRO_REMOVE_EMPTY";
/// Environment variable overriding [`Config::strict`]
pub const ENV_STRICT: &str = "DENDRO_STRICT";

/// Crate-wide defaults
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of compiled paths kept by the global path cache
    pub path_cache_capacity: usize,
    /// Default empty-removal policy for mappers built with [`Mapper::from_config`](crate::mapper::Mapper::from_config)
    pub remove_empty: bool,
    /// Default strict policy for mappers built from this config
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path_cache_capacity: DEFAULT_CAPACITY,
            remove_empty: true,
            strict: false,
        }
    }
}

impl Config {
    /// Parse a JSON document; missing fields take their defaults
    ///
    /// # Errors
    /// `ConfigError::Parse` for invalid JSON or unknown fields, or any
    /// validation error from [`Config::validate`].
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by any `DENDRO_*` environment variables that are set
    ///
    /// # Errors
    /// `ConfigError::Env` when a variable holds an unparseable value, or any
    /// validation error from [`Config::validate`].
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`Config::from_env`] with a custom variable source
    ///
    /// # Errors
    /// Same as [`Config::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let mut config = Config::default();

        if let Some(raw) = lookup(ENV_PATH_CACHE_CAPACITY) {
            config.path_cache_capacity = raw.trim().parse().map_err(|_| ConfigError::Env {
                var: ENV_PATH_CACHE_CAPACITY,
                value: raw.clone(),
            })?;
        }
        if let Some(raw) = lookup(ENV_REMOVE_EMPTY) {
            config.remove_empty = parse_flag(ENV_REMOVE_EMPTY, &raw)?;
        }
        if let Some(raw) = lookup(ENV_STRICT) {
            config.strict = parse_flag(ENV_STRICT, &raw)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration settings
    ///
    /// # Errors
    /// `ConfigError::InvalidValue` if `path_cache_capacity` is zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.path_cache_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                field: "path_cache_capacity",
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Validate and apply process-wide settings (the global path cache capacity)
    ///
    /// # Errors
    /// Any validation error from [`Config::validate`]; nothing is applied then.
    pub fn install(&self) -> ConfigResult<()> {
        self.validate()?;
        global_cache().set_capacity(self.path_cache_capacity);
        log::debug!("Installed configuration: {self:?}");
        Ok(())
    }
}

fn parse_flag(var: &'static str, raw: &str) -> ConfigResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Env {
            var,
            value: raw.to_string(),
        }),
    }
}
