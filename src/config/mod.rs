use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            url: default_database_url(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_service_name() -> String {
    "catalog-service".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_database_url() -> String {
    "sqlite:database.sqlite".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_min_connections() -> u32 {
    1
}

impl CatalogConfig {
    /// Load from an optional `configuration` file plus `APP__`-prefixed
    /// environment variables (e.g. `APP__DATABASE__URL`).
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let config: CatalogConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.database.url.is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "database.url must not be empty"
            )));
        }
        if self.database.max_connections == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "database.max_connections must be greater than 0"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = CatalogConfig {
            port: default_port(),
            service_name: default_service_name(),
            log_level: default_log_level(),
            database: DatabaseConfig::default(),
        };

        assert_eq!(config.port, 3000);
        assert_eq!(config.database.url, "sqlite:database.sqlite");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_connection_pool() {
        let config = CatalogConfig {
            port: default_port(),
            service_name: default_service_name(),
            log_level: default_log_level(),
            database: DatabaseConfig {
                max_connections: 0,
                ..DatabaseConfig::default()
            },
        };

        assert!(config.validate().is_err());
    }
}
