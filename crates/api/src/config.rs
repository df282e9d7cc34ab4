//! Server configuration from the process environment.

use crate::auth::jwt::JwtConfig;

/// Runtime settings for the HTTP server.
///
/// Every field has a local-development default; deployments override them
/// through environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Browser origins allowed by CORS.
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Access-token validation settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Read the configuration, falling back to development defaults.
    ///
    /// Recognized variables: `HOST` (default `0.0.0.0`), `PORT` (`3000`),
    /// `CORS_ORIGINS` (comma-separated, `http://localhost:5173`),
    /// `REQUEST_TIMEOUT_SECS` (`30`), `SHUTDOWN_TIMEOUT_SECS` (`30`), plus
    /// the `JWT_*` family read by [`JwtConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics on malformed values.
    pub fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_parsed("PORT", 3000),
            cors_origins: split_csv(&env_or("CORS_ORIGINS", "http://localhost:5173")),
            request_timeout_secs: env_parsed("REQUEST_TIMEOUT_SECS", 30),
            shutdown_timeout_secs: env_parsed("SHUTDOWN_TIMEOUT_SECS", 30),
            jwt: JwtConfig::from_env(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{name} is malformed: {e}")),
        Err(_) => default,
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
