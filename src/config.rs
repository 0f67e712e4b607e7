//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`, loaded by the binary before anything
//! else). The Nutritionix credentials are required; everything else has a
//! default.
//!
//! | Variable               | Default                             |
//! |------------------------|-------------------------------------|
//! | `APP_ID`               | required                            |
//! | `APP_KEY`              | required                            |
//! | `PORT`                 | `9000`                              |
//! | `LISTEN_ADDR`          | `0.0.0.0:{PORT}`                    |
//! | `NUTRITIONIX_BASE_URL` | `https://trackapi.nutritionix.com`  |
//! | `LOOKUP_TIMEOUT_SECS`  | `30`                                |
//! | `LOG_FORMAT`           | `text` (`json` for structured logs) |

use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 9000;

/// Base URL of the public Nutritionix API.
pub const DEFAULT_NUTRITIONIX_BASE_URL: &str = "https://trackapi.nutritionix.com";

/// Upper bound on one outbound lookup when `LOOKUP_TIMEOUT_SECS` is not set.
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 30;

/// Configuration error raised at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty.
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    /// A variable is set but cannot be parsed.
    #[error("invalid value for {key}: {value:?}")]
    Invalid {
        /// Variable name.
        key: &'static str,
        /// Raw value found in the environment.
        value: String,
    },
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    /// Reads `LOG_FORMAT` from the process environment.
    ///
    /// Read separately from [`Config`] because the subscriber is
    /// installed before the rest of the configuration is validated.
    #[must_use]
    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }

    /// Maps a raw `LOG_FORMAT` value; anything but `json` is text.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`Config::from_env`].
#[derive(Clone)]
pub struct Config {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:9000`).
    pub listen_addr: SocketAddr,

    /// Nutritionix application id, sent as `x-app-id`.
    pub app_id: String,

    /// Nutritionix application key, sent as `x-app-key`.
    pub app_key: String,

    /// Base URL of the Nutritionix API.
    pub nutritionix_base_url: String,

    /// Upper bound on a single outbound lookup.
    pub lookup_timeout: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("app_id", &self.app_id)
            .field("app_key", &"<redacted>")
            .field("nutritionix_base_url", &self.nutritionix_base_url)
            .field("lookup_timeout", &self.lookup_timeout)
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] if `APP_ID` or `APP_KEY` is absent,
    /// or [`ConfigError::Invalid`] if an optional variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_source<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_id = require(&var, "APP_ID")?;
        let app_key = require(&var, "APP_KEY")?;

        let port: u16 = parse_var(&var, "PORT", DEFAULT_PORT)?;
        let listen_addr = parse_var(
            &var,
            "LISTEN_ADDR",
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        )?;

        let nutritionix_base_url = var("NUTRITIONIX_BASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_NUTRITIONIX_BASE_URL.to_string());

        let timeout_secs = parse_var(&var, "LOOKUP_TIMEOUT_SECS", DEFAULT_LOOKUP_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "LOOKUP_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            listen_addr,
            app_id,
            app_key,
            nutritionix_base_url,
            lookup_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Returns the value of a required, non-empty variable.
fn require<F>(var: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    var(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

/// Parses an optional variable as `T`, returning `default` when unset.
fn parse_var<F, T>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match var(key) {
        None => Ok(default),
        Some(raw) if raw.is_empty() => Ok(default),
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
