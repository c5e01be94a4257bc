// src/config.rs

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_COMPLAINTS_URL: &str = "https://your-api-domain.com/api/complaints";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} is not a valid URL: {reason}")]
    InvalidUrl { key: &'static str, reason: String },
    #[error("{key} has an invalid value {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Startup settings, read once from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub complaints_url: Url,
    /// `None` means use the built-in sample projects.
    pub projects_url: Option<Url>,
    pub submit_timeout: Duration,
    pub camera_dir: Option<PathBuf>,
    pub media_library_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, but reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = parse_value(
            "ROADWATCH_BIND",
            get("ROADWATCH_BIND").unwrap_or_else(|| "127.0.0.1:3000".into()),
        )?;

        let max_workers: usize = parse_value(
            "ROADWATCH_MAX_WORKERS",
            get("ROADWATCH_MAX_WORKERS").unwrap_or_else(|| "8".into()),
        )?;
        if max_workers == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ROADWATCH_MAX_WORKERS",
                value: "0".into(),
            });
        }

        let complaints_url = parse_url(
            "ROADWATCH_COMPLAINTS_URL",
            &get("ROADWATCH_COMPLAINTS_URL").unwrap_or_else(|| DEFAULT_COMPLAINTS_URL.into()),
        )?;

        let projects_url = get("ROADWATCH_PROJECTS_URL")
            .map(|raw| parse_url("ROADWATCH_PROJECTS_URL", &raw))
            .transpose()?;

        let timeout_secs: u64 = parse_value(
            "ROADWATCH_SUBMIT_TIMEOUT_SECS",
            get("ROADWATCH_SUBMIT_TIMEOUT_SECS").unwrap_or_else(|| "30".into()),
        )?;

        Ok(Self {
            bind_addr,
            max_workers,
            complaints_url,
            projects_url,
            submit_timeout: Duration::from_secs(timeout_secs),
            camera_dir: get("ROADWATCH_CAMERA_DIR").map(PathBuf::from),
            media_library_dir: get("ROADWATCH_MEDIA_LIBRARY_DIR").map(PathBuf::from),
        })
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value: raw })
}

fn parse_url(key: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        key,
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidUrl {
            key,
            reason: format!("unsupported scheme {other:?}"),
        }),
    }
}
