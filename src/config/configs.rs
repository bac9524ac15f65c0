use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::{defaults, envconfig::EnvConfig, validate};

// No `deny_unknown_fields` at the top level: the legacy `APP_HOST` and
// `APP_PORT` variables land here as stray `host`/`port` keys.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        <Self as EnvConfig>::from_env()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.general.host, self.general.port)
    }
}

impl EnvConfig for AppConfig {
    fn fallback_values() -> Vec<(&'static str, String)> {
        legacy_values(|name| std::env::var(name).ok())
    }

    fn validate(&self) -> Result<()> {
        validate::validate(self)
    }
}

fn legacy_values(lookup: impl Fn(&str) -> Option<String>) -> Vec<(&'static str, String)> {
    defaults::LEGACY_ENV_KEYS
        .iter()
        .filter_map(|(name, key)| lookup(name).map(|value| (*key, value)))
        .collect()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT as u16,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

/// Postgres connection settings. A full `url` wins over the components.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub sslmode: String,
    pub max_connections: u32,
    pub min_idle: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: defaults::DEFAULT_DB_HOST.to_string(),
            port: defaults::DEFAULT_DB_PORT as u16,
            user: String::new(),
            password: String::new(),
            name: String::new(),
            sslmode: defaults::DEFAULT_DB_SSLMODE.to_string(),
            max_connections: defaults::DEFAULT_DB_MAX_CONNECTIONS as u32,
            min_idle: defaults::DEFAULT_DB_MIN_IDLE as u32,
        }
    }
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        if let Some(url) = self.url.as_deref().filter(|url| !url.trim().is_empty()) {
            return url.to_string();
        }
        let credentials = if self.password.is_empty() {
            self.user.clone()
        } else {
            format!("{}:{}", self.user, self.password)
        };
        format!(
            "postgres://{}@{}:{}/{}?sslmode={}",
            credentials, self.host, self.port, self.name, self.sslmode
        )
    }
}
