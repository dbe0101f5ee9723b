use log::warn;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_DATABASE_PATH: &str = "tournament.db";

#[derive(Debug, Clone)]
pub struct StoreSettings {
    pub database_path: String,
    pub pool_size: u32,
    pub connection_timeout: Duration,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            pool_size: 4,
            connection_timeout: Duration::from_secs(5),
        }
    }
}

impl StoreSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            database_path: std::env::var("DATABASE_PATH").unwrap_or(defaults.database_path),
            pool_size: env_or("DATABASE_POOL_SIZE", defaults.pool_size),
            connection_timeout: Duration::from_secs(env_or(
                "DATABASE_TIMEOUT_SECS",
                defaults.connection_timeout.as_secs(),
            )),
        }
    }
}

fn env_or<T: FromStr + Copy>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => parse_or(key, &raw, default),
        Err(_) => default,
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: &str, default: T) -> T {
    raw.trim().parse().unwrap_or_else(|_| {
        warn!("Ignoring invalid value {:?} for {}", raw, key);
        default
    })
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub store: StoreSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            store: StoreSettings::from_env(),
        }
    }

    pub fn with_database_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.store.database_path = path;
        }
        self
    }
}
