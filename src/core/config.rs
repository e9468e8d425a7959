//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file, if present). The Coolify
//! connection settings are mandatory: loading fails without them, before any
//! session is served.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Default HTTP timeout for Coolify requests, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Coolify API connection.
    pub coolify: CoolifyConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Connection settings for the Coolify API.
#[derive(Clone, Serialize, Deserialize)]
pub struct CoolifyConfig {
    /// Instance root, e.g. `https://coolify.example.com`. No `/api` suffix.
    pub base_url: String,

    /// API token created under Keys & Tokens in the Coolify UI.
    pub api_token: String,

    /// Per-request timeout in milliseconds. `0` disables the timeout.
    pub timeout_ms: u64,
}

impl CoolifyConfig {
    /// Per-request timeout, or `None` when disabled with `0`.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for CoolifyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoolifyConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "coolify-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required: `COOLIFY_BASE_URL`, `COOLIFY_API_TOKEN`.
    /// Optional: `COOLIFY_TIMEOUT` (ms), `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// and the `MCP_TRANSPORT` family read by [`TransportConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut server = ServerConfig::default();
        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            server.name = name;
        }

        let mut logging = LoggingConfig::default();
        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            logging.level = level;
        }

        Ok(Self {
            server,
            logging,
            transport: TransportConfig::from_env(),
            coolify: CoolifyConfig::from_env()?,
        })
    }
}

impl CoolifyConfig {
    /// Load the Coolify connection settings from environment variables.
    pub fn from_env() -> Result<Self> {
        let non_empty = |key: &str| {
            std::env::var(key)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let (Some(base_url), Some(api_token)) =
            (non_empty("COOLIFY_BASE_URL"), non_empty("COOLIFY_API_TOKEN"))
        else {
            return Err(Error::config(
                "COOLIFY_BASE_URL and COOLIFY_API_TOKEN environment variables are required",
            ));
        };

        let timeout_ms = match non_empty("COOLIFY_TIMEOUT") {
            Some(raw) => raw.parse().map_err(|_| {
                Error::config(format!(
                    "COOLIFY_TIMEOUT must be a number of milliseconds, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            base_url,
            api_token,
            timeout_ms,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn set_env(base_url: Option<&str>, token: Option<&str>, timeout: Option<&str>) {
        let pairs = [
            ("COOLIFY_BASE_URL", base_url),
            ("COOLIFY_API_TOKEN", token),
            ("COOLIFY_TIMEOUT", timeout),
        ];
        for (key, value) in pairs {
            unsafe {
                match value {
                    Some(v) => std::env::set_var(key, v),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    #[test]
    fn test_coolify_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_env(Some("https://coolify.example.com"), Some("1|secret"), Some("5000"));

        let config = CoolifyConfig::from_env().unwrap();
        assert_eq!(config.base_url, "https://coolify.example.com");
        assert_eq!(config.api_token, "1|secret");
        assert_eq!(config.timeout(), Some(Duration::from_millis(5000)));

        set_env(None, None, None);
    }

    #[test]
    fn test_timeout_defaults_to_30s() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_env(Some("https://coolify.example.com"), Some("1|secret"), None);

        let config = CoolifyConfig::from_env().unwrap();
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);

        set_env(None, None, None);
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_env(Some("https://coolify.example.com"), None, None);

        let err = CoolifyConfig::from_env().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("COOLIFY_API_TOKEN"));

        set_env(None, None, None);
    }

    #[test]
    fn test_blank_base_url_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_env(Some("   "), Some("1|secret"), None);

        assert!(CoolifyConfig::from_env().is_err());

        set_env(None, None, None);
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_env(Some("https://coolify.example.com"), Some("1|secret"), Some("soon"));

        let err = CoolifyConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("COOLIFY_TIMEOUT"));

        set_env(None, None, None);
    }

    #[test]
    fn test_zero_timeout_disables_timeout() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        set_env(Some("https://coolify.example.com"), Some("1|secret"), Some("0"));

        let config = CoolifyConfig::from_env().unwrap();
        assert_eq!(config.timeout_ms, 0);
        assert_eq!(config.timeout(), None);

        set_env(None, None, None);
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let config = CoolifyConfig {
            base_url: "https://coolify.example.com".to_string(),
            api_token: "super_secret_token".to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        };
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
