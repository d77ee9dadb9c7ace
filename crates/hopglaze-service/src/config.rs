//! Configuration for the catalog service binary.
//!
//! All configuration is loaded from environment variables. The service only
//! needs to know where its `SQLite` database lives and which address to
//! listen on.

use crate::error::ServiceError;

/// Default `SQLite` database URL.
const DEFAULT_DATABASE_URL: &str = "sqlite://hopglaze.db";

/// Default HTTP bind host.
const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default HTTP port.
const DEFAULT_HTTP_PORT: u16 = 5000;

/// Complete service configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// `SQLite` database URL (e.g. `sqlite://hopglaze.db`).
    pub database_url: String,
    /// Host address the HTTP server binds to.
    pub http_host: String,
    /// TCP port the HTTP server listens on.
    pub http_port: u16,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `DATABASE_URL` -- `SQLite` connection string (default `sqlite://hopglaze.db`)
    /// - `HTTP_HOST` -- bind address (default `0.0.0.0`)
    /// - `HTTP_PORT` -- listen port (default `5000`)
    pub fn from_env() -> Result<Self, ServiceError> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_owned());

        let http_host = std::env::var("HTTP_HOST").unwrap_or_else(|_| DEFAULT_HTTP_HOST.to_owned());

        let http_port: u16 = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string())
            .parse()
            .map_err(|e| ServiceError::Config(format!("invalid HTTP_PORT: {e}")))?;

        Ok(Self {
            database_url,
            http_host,
            http_port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        assert_eq!(DEFAULT_DATABASE_URL, "sqlite://hopglaze.db");
        assert_eq!(DEFAULT_HTTP_PORT, 5000);

        let port: u16 = DEFAULT_HTTP_PORT.to_string().parse().unwrap_or(0);
        assert_eq!(port, DEFAULT_HTTP_PORT);
    }
}
