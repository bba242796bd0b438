pub mod commands;
pub mod modules;
mod schema;
pub mod shared;

use modules::{mall::MallService, store::StoreService};
use shared::{
    infrastructure::{InMemoryUnitOfWork, PgUnitOfWork},
    utils::logger::init_logger,
    AppConfig, AppResult, Database, StorageBackend, UnitOfWork,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Services wired to one storage backend
#[derive(Clone)]
pub struct AppContext {
    pub mall_service: Arc<MallService>,
    pub store_service: Arc<StoreService>,
}

impl AppContext {
    pub fn new(uow: Arc<dyn UnitOfWork>) -> Self {
        Self {
            mall_service: Arc::new(MallService::new(Arc::clone(&uow))),
            store_service: Arc::new(StoreService::new(uow)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUnitOfWork::new()))
    }

    /// Build the storage backend named by the config.
    ///
    /// Blocking: connects to PostgreSQL and applies pending migrations.
    pub fn initialize(config: &AppConfig) -> AppResult<Self> {
        let uow: Arc<dyn UnitOfWork> = match config.storage {
            StorageBackend::Postgres => {
                let database = Arc::new(Database::new(config)?);
                database.run_migrations()?;
                Arc::new(PgUnitOfWork::new(database))
            }
            StorageBackend::Memory => {
                log::warn!("Using in-memory storage; data is lost on exit");
                Arc::new(InMemoryUnitOfWork::new())
            }
        };

        log::info!("Storage backend: {}", uow.backend_name());
        Ok(Self::new(uow))
    }
}

/// Read one JSON command per stdin line and answer with one JSON line each
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = AppConfig::from_env()?;
    let context = tokio::task::spawn_blocking(move || AppContext::initialize(&config)).await??;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = commands::handle_line(&line, &context).await;
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        stdout.write_all(&encoded).await?;
        stdout.flush().await?;
    }

    log::info!("Input closed, shutting down");
    Ok(())
}
