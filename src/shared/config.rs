use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::str::FromStr;

/// Which unit-of-work implementation backs the services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(AppError::InvalidInput(format!(
                "Unknown storage backend '{}', expected 'postgres' or 'memory'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub pool_size: Option<u32>,
}

impl AppConfig {
    /// Build the configuration from process environment (after `.env` is loaded)
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        let storage = match lookup("PLAZA_STORAGE") {
            Some(value) => value.parse()?,
            None if database_url.is_some() => StorageBackend::Postgres,
            None => StorageBackend::Memory,
        };

        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(AppError::InvalidInput(
                "DATABASE_URL must be set when PLAZA_STORAGE=postgres".to_string(),
            ));
        }

        let pool_size = lookup("PLAZA_DB_POOL_SIZE")
            .map(|value| value.parse::<u32>())
            .transpose()?;

        Ok(Self {
            storage,
            database_url,
            pool_size,
        })
    }

    pub fn in_memory() -> Self {
        Self {
            storage: StorageBackend::Memory,
            database_url: None,
            pool_size: None,
        }
    }
}
