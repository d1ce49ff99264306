use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_path: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: String,
    pub request_timeout_secs: u64,
    pub max_pool_size: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_path: env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "quizdeck.db".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            max_pool_size: env::var("DB_MAX_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Every store operation and the handler wrapping it fail after this long
    /// rather than hanging on a wedged connection.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate that production-critical configuration is set.
    /// Panics if required settings are using development defaults.
    pub fn validate_for_production(&self) {
        if self.database_path == ":memory:" {
            panic!(
                "FATAL: DATABASE_PATH is set to the in-memory store! Set DATABASE_PATH to a persistent file path."
            );
        }

        if self.request_timeout_secs == 0 {
            panic!("FATAL: REQUEST_TIMEOUT_SECS must be greater than zero.");
        }

        if self.max_pool_size == 0 {
            panic!("FATAL: DB_MAX_POOL_SIZE must be greater than zero.");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            database_path: ":memory:".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            cors_allowed_origin: "http://localhost:5173".to_string(),
            request_timeout_secs: 5,
            max_pool_size: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        // Should use env vars if set, or fall back to defaults
        assert!(!config.database_path.is_empty());
        assert!(!config.web_server_host.is_empty());
        assert!(config.max_pool_size > 0);
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.database_path, ":memory:");
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }
}
