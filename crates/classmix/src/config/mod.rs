use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub roster: RosterConfig,
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

        let roster = RosterConfig::load()?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            roster,
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

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Input-range bounds enforced at the service boundary before any
/// grouping is computed.
#[derive(Debug, Clone)]
pub struct RosterConfig {
    pub min_group_size: usize,
    pub max_group_size: usize,
    pub max_seed: u64,
}

impl RosterConfig {
    fn load() -> Result<Self, ConfigError> {
        let min_group_size = env::var("APP_GROUP_SIZE_MIN")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidGroupBounds)?;
        let max_group_size = env::var("APP_GROUP_SIZE_MAX")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidGroupBounds)?;
        let max_seed = env::var("APP_SEED_MAX")
            .unwrap_or_else(|_| "10000".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidSeedBound)?;

        if min_group_size == 0 || min_group_size > max_group_size {
            return Err(ConfigError::InvalidGroupBounds);
        }

        Ok(Self {
            min_group_size,
            max_group_size,
            max_seed,
        })
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            min_group_size: 2,
            max_group_size: 20,
            max_seed: 10_000,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidGroupBounds,
    InvalidSeedBound,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidGroupBounds => write!(
                f,
                "APP_GROUP_SIZE_MIN/APP_GROUP_SIZE_MAX must be positive integers with min <= max"
            ),
            ConfigError::InvalidSeedBound => write!(f, "APP_SEED_MAX must be a valid u64"),
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
