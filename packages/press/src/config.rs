use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL URL of the legacy content database.
    pub url: String,
    /// Default: 5.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Default: 1.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Default: 8.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Log every statement sqlx runs. Default: false.
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_max_connections() -> u32 {
    5
}
fn default_min_connections() -> u32 {
    1
}
fn default_connect_timeout_secs() -> u64 {
    8
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout_secs(),
            sqlx_logging: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("PRESS_CONFIG").unwrap_or_else(|_| "config/config".to_string());

        let s = Config::builder()
            .set_default("database.max_connections", 5_i64)?
            .set_default("database.min_connections", 1_i64)?
            .set_default("database.connect_timeout_secs", 8_i64)?
            .set_default("database.sqlx_logging", false)?
            .add_source(File::with_name(&config_path).required(false))
            // Override from environment (e.g., PRESS__DATABASE__URL)
            .add_source(Environment::with_prefix("PRESS").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
