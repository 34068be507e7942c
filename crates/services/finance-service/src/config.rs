//! Finance service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

const SERVICE_NAME: &str = "finance-service";

/// Finance service configuration.
#[derive(Debug, Clone)]
pub struct FinanceServiceConfig {
    /// HTTP binding and logging
    pub service: ServiceConfig,
    /// Database connection pool
    pub database: DatabaseConfig,
}

impl FinanceServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                host: env::var("FINANCE_SERVICE_HOST").unwrap_or(defaults.service.host),
                port: parsed("FINANCE_SERVICE_PORT").unwrap_or(defaults.service.port),
                log_level: env::var("FINANCE_SERVICE_LOG_LEVEL")
                    .unwrap_or(defaults.service.log_level),
            },
            database: DatabaseConfig {
                url: env::var("FINANCE_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: parsed("FINANCE_SERVICE_DB_MAX_CONNECTIONS")
                    .unwrap_or(defaults.database.max_connections),
                min_connections: parsed("FINANCE_SERVICE_DB_MIN_CONNECTIONS")
                    .unwrap_or(defaults.database.min_connections),
            },
        }
    }
}

fn parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Default for FinanceServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
        }
    }
}
