/// In-memory unit of work used for tests and database-less runs.
///
/// Transactions are serialized behind one async mutex. Each one works on a
/// copy of the tables that replaces the committed state only on success.
use crate::modules::mall::domain::Mall;
use crate::modules::store::domain::Store;
use crate::shared::errors::AppResult;
use crate::shared::persistence::{TransactionWork, UnitOfWork};
use crate::shared::utils::logger::LogContext;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Rows kept in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryTables {
    pub(crate) malls: Vec<Mall>,
    pub(crate) stores: Vec<Store>,
}

#[derive(Default)]
pub struct InMemoryUnitOfWork {
    tables: Mutex<MemoryTables>,
}

impl InMemoryUnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the committed rows
    pub async fn snapshot(&self) -> MemoryTables {
        self.tables.lock().await.clone()
    }
}

impl MemoryTables {
    pub fn mall_count(&self) -> usize {
        self.malls.len()
    }

    pub fn store_count(&self) -> usize {
        self.stores.len()
    }
}

/// Transaction handle over the working copy of the tables
pub struct MemoryTransaction<'a> {
    pub(crate) tables: &'a mut MemoryTables,
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn execute(&self, work: TransactionWork) -> AppResult<()> {
        let mut committed = self.tables.lock().await;
        let mut working = committed.clone();

        let result = work(&mut MemoryTransaction {
            tables: &mut working,
        });

        match result {
            Ok(()) => {
                *committed = working;
                LogContext::db_operation("commit", "memory", Some(0));
                Ok(())
            }
            Err(e) => {
                LogContext::db_operation("rollback", "memory", Some(0));
                Err(e)
            }
        }
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
