//! Server configuration.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Database URL.
    pub database_url: String,
    /// Secret used to sign and validate session tokens.
    pub jwt_secret: String,
    /// Session expiration in hours.
    pub jwt_expiration_hours: u64,
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let jwt_secret = env::var("DAYBOOK_JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("DAYBOOK_JWT_SECRET is required"))?;

        Ok(Self {
            host: env::var("DAYBOOK_SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("DAYBOOK_SERVER_PORT")
                .unwrap_or_else(|_| "8460".to_string())
                .parse()
                .unwrap_or(8460),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:daybook.db?mode=rwc".to_string()),
            jwt_secret,
            jwt_expiration_hours: env::var("DAYBOOK_JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .unwrap_or(24),
            log_level: env::var("DAYBOOK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Returns the server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
