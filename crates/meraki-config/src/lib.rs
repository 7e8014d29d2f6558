//! Configuration for the Meraki dashboard server.
//!
//! Layered loading (defaults → TOML file → `MERAKI_*` environment), API key
//! resolution, and translation into the read-only [`DashboardSettings`] the
//! server is built from.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use url::Url;

use meraki_api::{DEFAULT_BASE_URL, MerakiClient, TransportConfig};
use meraki_core::DEFAULT_CLIENT_TIMESPAN_SECS;

/// Substituted when no API key is configured. Every upstream call made
/// with it is rejected, so the dashboard reports the organizations error.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_MERAKI_API_KEY";

/// Prefix for environment overrides; `MERAKI_API_KEY` sets `api_key`.
pub const ENV_PREFIX: &str = "MERAKI_";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Raw configuration as read from file and environment.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Dashboard API key (prefer the `MERAKI_API_KEY` env var).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Dashboard API root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Address the HTTP server listens on.
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Upstream request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Client history window in seconds.
    #[serde(default = "default_client_timespan")]
    pub client_timespan: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            bind: default_bind(),
            timeout: default_timeout(),
            client_timespan: default_client_timespan(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_bind() -> String {
    "127.0.0.1:5000".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_client_timespan() -> u64 {
    DEFAULT_CLIENT_TIMESPAN_SECS
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "merakidash", "merakidash").map_or_else(
        || {
            let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
            p.push(".config");
            p.push("merakidash");
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from defaults, TOML file, and environment.
///
/// `path` overrides the platform config location. A missing file is not an
/// error; the defaults and environment still apply.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed(ENV_PREFIX));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Resolved settings ───────────────────────────────────────────────

/// Validated, read-only settings built once at startup.
#[derive(Debug)]
pub struct DashboardSettings {
    pub api_key: SecretString,
    /// `true` when [`PLACEHOLDER_API_KEY`] stands in for a missing key.
    pub api_key_is_placeholder: bool,
    pub base_url: Url,
    pub bind: SocketAddr,
    pub timeout: Duration,
    pub client_timespan_secs: u64,
}

impl DashboardSettings {
    /// Validate a raw [`Config`].
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("{e}: {}", config.base_url),
        })?;

        let bind: SocketAddr = config.bind.parse().map_err(|_| ConfigError::Validation {
            field: "bind".into(),
            reason: format!("expected host:port, got '{}'", config.bind),
        })?;

        if config.timeout == 0 {
            return Err(ConfigError::Validation {
                field: "timeout".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        if config.client_timespan == 0 {
            return Err(ConfigError::Validation {
                field: "client_timespan".into(),
                reason: "must be at least 1 second".into(),
            });
        }

        let (api_key, api_key_is_placeholder) = resolve_api_key(config.api_key);

        Ok(Self {
            api_key,
            api_key_is_placeholder,
            base_url,
            bind,
            timeout: Duration::from_secs(config.timeout),
            client_timespan_secs: config.client_timespan,
        })
    }

    /// Transport settings for the Dashboard API client.
    pub fn transport(&self) -> TransportConfig {
        TransportConfig::default().with_timeout(self.timeout)
    }

    /// Build the Dashboard API client these settings describe.
    pub fn client(&self) -> Result<MerakiClient, meraki_api::Error> {
        MerakiClient::new(self.base_url.as_str(), &self.api_key, &self.transport())
    }
}

// ── Credential resolution ───────────────────────────────────────────

/// Use the configured key, or fall back to the placeholder with a warning.
fn resolve_api_key(configured: Option<String>) -> (SecretString, bool) {
    match configured.filter(|key| !key.trim().is_empty()) {
        Some(key) => (SecretString::from(key), false),
        None => {
            warn!(
                "MERAKI_API_KEY environment variable not set; \
                 using a placeholder key, Dashboard API calls will fail"
            );
            (SecretString::from(PLACEHOLDER_API_KEY.to_owned()), true)
        }
    }
}
