//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from environment variables (and a
//! `.env` file if present). Every value has a default except the
//! Freelancehunt API key.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::error::{Error, Result};
use super::transport::TransportConfig;

/// Default Freelancehunt API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.freelancehunt.com/v2";

/// Default minimum delay between outbound API requests.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Default outbound request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Freelancehunt API client configuration.
    pub api: ApiConfig,
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

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Freelancehunt API client configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Personal API token sent as a bearer credential.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    /// API base URL, without a trailing slash.
    pub base_url: String,

    /// Minimum spacing between consecutive requests.
    pub request_delay: Duration,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("request_delay", &self.request_delay)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_delay: DEFAULT_REQUEST_DELAY,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "freelancehunt-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

/// Parse a number of seconds. Negative, non-finite or unparsable values yield `None`.
fn parse_seconds(raw: &str) -> Option<Duration> {
    let secs: f64 = raw.trim().parse().ok()?;
    Duration::try_from_secs_f64(secs).ok()
}

fn seconds_from_env(var: &str, default: Duration) -> Duration {
    match std::env::var(var) {
        Ok(raw) => parse_seconds(&raw).unwrap_or_else(|| {
            warn!("Invalid {} value {:?}, using default {:?}", var, raw, default);
            default
        }),
        Err(_) => default,
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...). API settings use
    /// `FREELANCEHUNT_API_KEY`, `FREELANCEHUNT_BASE_URL`,
    /// `FREELANCEHUNT_TIMEOUT` and `REQUEST_DELAY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.api.api_key = std::env::var("FREELANCEHUNT_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if config.api.api_key.is_some() {
            info!("Freelancehunt API key loaded from environment");
        }

        if let Ok(base_url) = std::env::var("FREELANCEHUNT_BASE_URL") {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }

        config.api.request_delay = seconds_from_env("REQUEST_DELAY", DEFAULT_REQUEST_DELAY);

        config.api.timeout = match seconds_from_env("FREELANCEHUNT_TIMEOUT", DEFAULT_TIMEOUT) {
            timeout if timeout.is_zero() => {
                warn!("FREELANCEHUNT_TIMEOUT must be positive, using default {:?}", DEFAULT_TIMEOUT);
                DEFAULT_TIMEOUT
            }
            timeout => timeout,
        };

        config
    }

    /// Check values that would otherwise only fail on first use.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            Error::config(format!(
                "Invalid FREELANCEHUNT_BASE_URL '{}': {}",
                self.api.base_url, e
            ))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "FREELANCEHUNT_BASE_URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const API_VARS: [&str; 4] = [
        "FREELANCEHUNT_API_KEY",
        "FREELANCEHUNT_BASE_URL",
        "FREELANCEHUNT_TIMEOUT",
        "REQUEST_DELAY",
    ];

    fn clear_api_vars() {
        for var in API_VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_api_config_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_vars();
        unsafe {
            std::env::set_var("FREELANCEHUNT_API_KEY", "test_key_12345");
            std::env::set_var("FREELANCEHUNT_BASE_URL", "http://localhost:8080/v2/");
            std::env::set_var("REQUEST_DELAY", "0.25");
            std::env::set_var("FREELANCEHUNT_TIMEOUT", "10");
        }
        let config = Config::from_env();
        assert_eq!(config.api.api_key.as_deref(), Some("test_key_12345"));
        assert_eq!(config.api.base_url, "http://localhost:8080/v2");
        assert_eq!(config.api.request_delay, Duration::from_millis(250));
        assert_eq!(config.api.timeout, Duration::from_secs(10));
        clear_api_vars();
    }

    #[test]
    fn test_api_config_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_vars();
        let config = Config::from_env();
        assert!(config.api.api_key.is_none());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.request_delay, DEFAULT_REQUEST_DELAY);
        assert_eq!(config.api.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_invalid_delay_falls_back() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_vars();
        unsafe {
            std::env::set_var("REQUEST_DELAY", "-2");
            std::env::set_var("FREELANCEHUNT_TIMEOUT", "soon");
        }
        let config = Config::from_env();
        assert_eq!(config.api.request_delay, DEFAULT_REQUEST_DELAY);
        assert_eq!(config.api.timeout, DEFAULT_TIMEOUT);

        unsafe {
            std::env::set_var("REQUEST_DELAY", "0");
            std::env::set_var("FREELANCEHUNT_TIMEOUT", "0");
        }
        let config = Config::from_env();
        assert_eq!(config.api.request_delay, Duration::ZERO);
        assert_eq!(config.api.timeout, DEFAULT_TIMEOUT);
        clear_api_vars();
    }

    #[test]
    fn test_blank_api_key_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_api_vars();
        unsafe {
            std::env::set_var("FREELANCEHUNT_API_KEY", "   ");
        }
        let config = Config::from_env();
        assert!(config.api.api_key.is_none());
        clear_api_vars();
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("1.5"), Some(Duration::from_millis(1500)));
        assert_eq!(parse_seconds(" 2 "), Some(Duration::from_secs(2)));
        assert_eq!(parse_seconds("-1"), None);
        assert_eq!(parse_seconds("NaN"), None);
        assert_eq!(parse_seconds("inf"), None);
        assert_eq!(parse_seconds(""), None);
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let api = ApiConfig {
            api_key: Some("super_secret_key".to_string()),
            ..ApiConfig::default()
        };
        let debug_str = format!("{:?}", api);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_api_key_not_serialized() {
        let mut config = Config::default();
        config.api.api_key = Some("super_secret_key".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("super_secret_key"));
    }

    #[test]
    fn test_validate_base_url() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.api.base_url = "not a url".to_string();
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        config.api.base_url = "ftp://api.freelancehunt.com/v2".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }

    #[test]
    fn test_default_server_name() {
        let config = Config::default();
        assert_eq!(config.server.name, "freelancehunt-mcp");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
    }
}
