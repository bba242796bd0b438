/// PostgreSQL unit of work backed by the Diesel r2d2 pool.
///
/// Diesel is synchronous, so every transaction runs on the blocking pool.
use super::database::Database;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::persistence::{TransactionWork, UnitOfWork};
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::Connection;
use std::sync::Arc;
use tokio::task;

pub struct PgUnitOfWork {
    db: Arc<Database>,
}

impl PgUnitOfWork {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

/// Transaction handle over a borrowed connection; the repository
/// implementations for it live next to each module's Diesel models.
pub struct PgTransaction<'conn> {
    conn: &'conn mut PgConnection,
}

impl<'conn> PgTransaction<'conn> {
    pub fn new(conn: &'conn mut PgConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&mut self) -> &mut PgConnection {
        self.conn
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn execute(&self, work: TransactionWork) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let start = std::time::Instant::now();
            let mut pooled = db.get_connection()?;
            let conn: &mut PgConnection = &mut pooled;

            let result = conn.transaction::<_, AppError, _>(|conn| {
                let mut tx = PgTransaction::new(conn);
                work(&mut tx)
            });

            LogContext::db_operation(
                if result.is_ok() { "commit" } else { "rollback" },
                "postgres",
                Some(start.elapsed().as_millis() as u64),
            );
            result
        })
        .await?
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
