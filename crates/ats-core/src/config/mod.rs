use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Which backing store the entity services talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceMode {
    /// In-memory repositories seeded from the bundled fixtures.
    Mock,
    /// REST backend reached over HTTP with a bearer credential.
    Remote,
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub data_source: DataSourceConfig,
    pub email: EmailConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mode = match env::var("ATS_DATA_SOURCE")
            .unwrap_or_else(|_| "mock".to_string())
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "mock" | "memory" => DataSourceMode::Mock,
            "remote" | "rest" => DataSourceMode::Remote,
            other => return Err(ConfigError::InvalidDataSource(other.to_string())),
        };

        let remote_base_url = env::var("ATS_REMOTE_BASE_URL").ok();
        if mode == DataSourceMode::Remote && remote_base_url.is_none() {
            return Err(ConfigError::MissingRemoteBaseUrl);
        }

        let request_timeout_secs = env::var("ATS_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let email = EmailConfig {
            from_address: env::var("ATS_EMAIL_FROM")
                .unwrap_or_else(|_| "ATS System <noreply@company.com>".to_string()),
            endpoint: env::var("ATS_EMAIL_ENDPOINT").ok(),
            api_key: env::var("ATS_EMAIL_API_KEY").ok(),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            data_source: DataSourceConfig {
                mode,
                remote_base_url,
                remote_token: env::var("ATS_REMOTE_TOKEN").ok(),
                request_timeout: Duration::from_secs(request_timeout_secs),
            },
            email,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Backing-store selection, fixed once at startup.
#[derive(Debug, Clone)]
pub struct DataSourceConfig {
    pub mode: DataSourceMode,
    pub remote_base_url: Option<String>,
    pub remote_token: Option<String>,
    pub request_timeout: Duration,
}

/// Outbound e-mail provider settings. Without an endpoint and API key the
/// service falls back to a non-sending, log-only mailer.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub from_address: String,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
}

impl EmailConfig {
    pub fn provider_configured(&self) -> bool {
        self.endpoint.is_some() && self.api_key.is_some()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidDataSource(String),
    MissingRemoteBaseUrl,
    InvalidTimeout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidDataSource(value) => {
                write!(f, "ATS_DATA_SOURCE must be 'mock' or 'remote', got '{value}'")
            }
            ConfigError::MissingRemoteBaseUrl => {
                write!(f, "ATS_REMOTE_BASE_URL is required when ATS_DATA_SOURCE=remote")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "ATS_REQUEST_TIMEOUT_SECS must be a valid u64")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_HOST");
        env::remove_var("APP_PORT");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("ATS_DATA_SOURCE");
        env::remove_var("ATS_REMOTE_BASE_URL");
        env::remove_var("ATS_REMOTE_TOKEN");
        env::remove_var("ATS_REQUEST_TIMEOUT_SECS");
        env::remove_var("ATS_EMAIL_FROM");
        env::remove_var("ATS_EMAIL_ENDPOINT");
        env::remove_var("ATS_EMAIL_API_KEY");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.data_source.mode, DataSourceMode::Mock);
        assert_eq!(config.data_source.request_timeout, Duration::from_secs(10));
        assert!(!config.email.provider_configured());
    }

    #[test]
    fn remote_mode_requires_base_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ATS_DATA_SOURCE", "remote");
        match AppConfig::load() {
            Err(ConfigError::MissingRemoteBaseUrl) => {}
            other => panic!("expected MissingRemoteBaseUrl, got {other:?}"),
        }
    }

    #[test]
    fn remote_mode_with_base_url_loads() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ATS_DATA_SOURCE", "remote");
        env::set_var("ATS_REMOTE_BASE_URL", "http://localhost:8081/api");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.data_source.mode, DataSourceMode::Remote);
        assert_eq!(
            config.data_source.remote_base_url.as_deref(),
            Some("http://localhost:8081/api")
        );
    }

    #[test]
    fn rejects_unknown_data_source() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ATS_DATA_SOURCE", "graphql");
        match AppConfig::load() {
            Err(ConfigError::InvalidDataSource(value)) => assert_eq!(value, "graphql"),
            other => panic!("expected InvalidDataSource, got {other:?}"),
        }
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
    }
}
