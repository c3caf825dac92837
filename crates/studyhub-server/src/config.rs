//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Server Configuration Constants
// ============================================================================

/// Default server host binding.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default CORS allowed origin for local development.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:3000";

/// Default path of the persisted session file.
pub const DEFAULT_SESSION_FILE: &str = "./state/study-hub-user.json";

/// Default simulated OAuth latency in milliseconds.
pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1500;

/// Default simulated upload latency in milliseconds.
pub const DEFAULT_UPLOAD_DELAY_MS: u64 = 2000;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub session: SessionConfig,
    pub mock: MockConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl CorsConfig {
    /// True when the configuration allows any origin
    ///
    /// An empty origin list and an explicit `*` entry both mean wildcard.
    pub fn is_wildcard(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }
}

/// Session persistence configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// File holding the serialized current-user record
    pub storage_path: PathBuf,
}

/// Simulated-latency configuration for the mock login and upload flows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockConfig {
    pub login_delay_ms: u64,
    pub upload_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            server: ServerConfig {
                host: std::env::var("STUDYHUB_HOST")
                    .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: std::env::var("STUDYHUB_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SERVER_PORT),
                shutdown_timeout_secs: std::env::var("STUDYHUB_SHUTDOWN_TIMEOUT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            },
            cors: CorsConfig {
                allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGIN.to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
                allow_credentials: std::env::var("CORS_ALLOW_CREDENTIALS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(true),
            },
            session: SessionConfig {
                storage_path: std::env::var("STUDYHUB_SESSION_FILE")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
            },
            mock: MockConfig {
                login_delay_ms: std::env::var("STUDYHUB_LOGIN_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_LOGIN_DELAY_MS),
                upload_delay_ms: std::env::var("STUDYHUB_UPLOAD_DELAY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_UPLOAD_DELAY_MS),
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.session.storage_path.as_os_str().is_empty() {
            anyhow::bail!("Session storage path cannot be empty");
        }

        // tower-http rejects `Access-Control-Allow-Credentials: true` together
        // with a wildcard origin at request time; catch it at startup instead
        if self.cors.is_wildcard() && self.cors.allow_credentials {
            anyhow::bail!(
                "CORS_ALLOW_CREDENTIALS=true cannot be combined with a wildcard \
                 origin; set CORS_ALLOWED_ORIGINS to explicit origins or disable \
                 credentials"
            );
        }

        if self.cors.allowed_origins.is_empty() {
            tracing::warn!("No CORS origins configured - all origins will be allowed");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            },
            cors: CorsConfig {
                allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()],
                allow_credentials: true,
            },
            session: SessionConfig {
                storage_path: PathBuf::from(DEFAULT_SESSION_FILE),
            },
            mock: MockConfig {
                login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
                upload_delay_ms: DEFAULT_UPLOAD_DELAY_MS,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.mock.login_delay_ms, DEFAULT_LOGIN_DELAY_MS);
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_session_path_rejected() {
        let mut config = Config::default();
        config.session.storage_path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_wildcard_origin_with_credentials_rejected() {
        let mut config = Config::default();
        config.cors.allow_credentials = true;

        config.cors.allowed_origins = vec!["*".to_string()];
        assert!(config.validate().is_err());

        config.cors.allowed_origins = Vec::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_wildcard_origin_without_credentials_is_valid() {
        let mut config = Config::default();
        config.cors.allowed_origins = vec!["*".to_string()];
        config.cors.allow_credentials = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_wildcard_detection() {
        let explicit = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            allow_credentials: true,
        };
        assert!(!explicit.is_wildcard());

        let starred = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string(), "*".to_string()],
            allow_credentials: false,
        };
        assert!(starred.is_wildcard());
    }
}
