use crate::core::{AppError, Result};
use std::env;

pub mod database;
pub mod rates;
pub mod server;

pub use database::DatabaseConfig;
pub use rates::RatesConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub rates: RatesConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            rates: RatesConfig::from_env()?,
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.rates.cache_ttl_hours == 0 {
            return Err(AppError::configuration(
                "Rate cache TTL must be greater than 0",
            ));
        }

        if self.rates.mortgage_url.is_empty() || self.rates.loan_url.is_empty() {
            return Err(AppError::configuration("Rate source URLs must not be empty"));
        }

        Ok(())
    }
}
