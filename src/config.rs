//! Layered configuration: built-in defaults, then `config.toml`, then
//! `EDUDBT_`-prefixed environment variables (`__` separates nested keys,
//! e.g. `EDUDBT_STORE__DATABASE_URL`).

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const CONFIG_FILE: &str = "config.toml";
pub const ENV_PREFIX: &str = "EDUDBT_";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub basic: BasicConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BasicConfig {
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub busy_timeout_ms: u64,
    /// Connection attempts after the first one before startup gives up.
    pub connect_retries: usize,
    pub retry_min_delay_ms: u64,
    pub retry_max_delay_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:edudbt.sqlite".to_string(),
            max_connections: 10,
            min_connections: 1,
            busy_timeout_ms: 5_000,
            connect_retries: 3,
            retry_min_delay_ms: 1_000,
            retry_max_delay_ms: 4_000,
        }
    }
}

impl StoreConfig {
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    pub fn retry_min_delay(&self) -> Duration {
        Duration::from_millis(self.retry_min_delay_ms)
    }

    pub fn retry_max_delay(&self) -> Duration {
        Duration::from_millis(self.retry_max_delay_ms)
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
