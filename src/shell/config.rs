// Process configuration, read once at startup.

use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};
use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATABASE_NAME: &str = "festival_planner";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        source: AddrParseError,
    },

    #[error("MONGO_URL is set but this build has no mongodb support")]
    MongoDbDisabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    InMemory,
    MongoDb { uri: String, database_name: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub secret_key: Option<String>,
    pub store: StoreConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|source| ConfigError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        let store = match var("MONGO_URL") {
            Some(uri) => StoreConfig::MongoDb {
                uri,
                database_name: var("DATABASE_NAME")
                    .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string()),
            },
            None => StoreConfig::InMemory,
        };

        Ok(Self {
            bind_addr,
            secret_key: var("SECRET_KEY"),
            store,
        })
    }

    /// Signing key for the session cookie. The secret is stretched to the 64
    /// bytes the key needs. Without a secret, sessions do not survive restarts.
    pub fn cookie_key(&self) -> Key {
        match &self.secret_key {
            Some(secret) => Key::from(Sha512::digest(secret.as_bytes()).as_slice()),
            None => {
                tracing::warn!("SECRET_KEY not set, using a random session key");
                Key::generate()
            }
        }
    }
}
