//! Client configuration parsed from environment variables.

use std::env::VarError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading client configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but empty after trimming.
    #[error("{var} must not be empty")]
    Empty { var: &'static str },

    /// A variable was set to a value that is not valid UTF-8.
    #[error("{var} is not valid unicode")]
    NotUnicode { var: &'static str },

    /// A numeric variable could not be parsed.
    #[error("{var} must be a non-negative integer, got '{value}'")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            timeouts: Timeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `BOARDS_API_BASE_URL`: default `http://localhost:3000`
    /// - `BOARDS_REQUEST_TIMEOUT_SECS`: default 30
    /// - `BOARDS_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an empty, non-unicode, or
    /// unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = env_var("BOARDS_API_BASE_URL")?;
        let request = env_var("BOARDS_REQUEST_TIMEOUT_SECS")?;
        let connect = env_var("BOARDS_CONNECT_TIMEOUT_SECS")?;

        Ok(Self {
            api_base_url: parse_base_url(base.as_deref())?,
            timeouts: Timeouts {
                request_secs: parse_secs("BOARDS_REQUEST_TIMEOUT_SECS", request.as_deref(), DEFAULT_REQUEST_TIMEOUT_SECS)?,
                connect_secs: parse_secs("BOARDS_CONNECT_TIMEOUT_SECS", connect.as_deref(), DEFAULT_CONNECT_TIMEOUT_SECS)?,
            },
        })
    }
}

fn env_var(var: &'static str) -> Result<Option<String>, ConfigError> {
    env_value(var, std::env::var(var))
}

fn env_value(var: &'static str, lookup: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match lookup {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { var }),
    }
}

fn parse_base_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_API_BASE_URL.to_owned());
    };
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var: "BOARDS_API_BASE_URL" });
    }
    Ok(trimmed.to_owned())
}

fn parse_secs(var: &'static str, raw: Option<&str>, default: u64) -> Result<u64, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidNumber { var, value: value.to_owned() }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
