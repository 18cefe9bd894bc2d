// src/config.rs

//! Server configuration loaded from environment variables.
//!
//! - `HOST`: interface to bind (default `0.0.0.0`)
//! - `PORT`: listening port (default `4000`)
//! - `MAX_WORKERS`: upper bound on request worker threads (default `8`)
//! - `LOG_LEVEL`: tracing filter used when `RUST_LOG` is unset (default `info`)

use std::env;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub max_workers: usize,
    pub log_level: String,
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    4000
}

fn default_max_workers() -> usize {
    8
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_workers: default_max_workers(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using `lookup` to resolve variable names. Unset or blank variables
    /// fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let host = match get("HOST") {
            Some(v) => parse_var("HOST", &v)?,
            None => default_host(),
        };

        let port = match get("PORT") {
            Some(v) => parse_var("PORT", &v)?,
            None => default_port(),
        };

        let max_workers = match get("MAX_WORKERS") {
            Some(v) => parse_var("MAX_WORKERS", &v)?,
            None => default_max_workers(),
        };
        if max_workers == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_WORKERS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let log_level = get("LOG_LEVEL").unwrap_or_else(default_log_level);

        Ok(Self {
            host,
            port,
            max_workers,
            log_level,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
