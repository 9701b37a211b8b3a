//! Server and logging configuration read from the environment.
//!
//! ## Environment variables
//!
//! | Variable          | Default                 | Purpose                              |
//! |-------------------|-------------------------|--------------------------------------|
//! | `HOST`            | `0.0.0.0`               | Bind address                         |
//! | `PORT`            | `8000`                  | Bind port                            |
//! | `ALLOWED_ORIGINS` | `http://localhost:3000` | Comma-separated CORS whitelist       |
//! | `MAX_BODY_BYTES`  | `1048576`               | Request body limit                   |
//! | `LOG_FORMAT`      | `text`                  | `json` or `text`                     |
//! | `LOG_FILE`        | (stdout)                | Log file path, rotated daily         |
//! | `LOG_ANSI`        | auto                    | Force ANSI colors on or off          |
//! | `RUST_LOG`        | see `defaults`          | Standard env filter                  |

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use tracing::warn;

use strand_core::defaults;

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Vec<HeaderValue>,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::SERVER_HOST.to_string(),
            port: defaults::SERVER_PORT,
            allowed_origins: parse_allowed_origins(defaults::ALLOWED_ORIGINS),
            max_body_bytes: defaults::MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    /// Read settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let origins =
            env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| defaults::ALLOWED_ORIGINS.to_string());

        Self {
            host: env::var("HOST").unwrap_or_else(|_| defaults::SERVER_HOST.to_string()),
            port: parse_env("PORT", defaults::SERVER_PORT),
            allowed_origins: parse_allowed_origins(&origins),
            max_body_bytes: parse_env("MAX_BODY_BYTES", defaults::MAX_BODY_BYTES),
        }
    }

    /// Socket address to bind.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Logging settings.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    pub file: Option<PathBuf>,
    /// `None` leaves ANSI detection to the subscriber.
    pub ansi: Option<bool>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };
        Self {
            format,
            file: env::var("LOG_FILE").ok().map(PathBuf::from),
            ansi: env::var("LOG_ANSI").ok().map(|v| is_truthy(&v)),
        }
    }
}

/// Parse a comma-separated origin list, dropping entries that are not valid
/// header values. An empty list falls back to the default origins.
pub fn parse_allowed_origins(raw: &str) -> Vec<HeaderValue> {
    let origins: Vec<HeaderValue> = raw
        .split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            match trimmed.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(e) => {
                    warn!("Invalid CORS origin '{}': {}", trimmed, e);
                    None
                }
            }
        })
        .collect();

    if origins.is_empty() && raw != defaults::ALLOWED_ORIGINS {
        return parse_allowed_origins(defaults::ALLOWED_ORIGINS);
    }
    origins
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn parse_env<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(
                variable = name,
                value = %raw,
                "Invalid configuration value, using default"
            );
            default
        }),
        Err(_) => default,
    }
}
