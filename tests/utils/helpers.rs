/// Test helper functions and service builders
use super::db::get_test_db_pool;
use plaza_lib::shared::infrastructure::{InMemoryUnitOfWork, PgUnitOfWork};
use plaza_lib::shared::Database;
use plaza_lib::AppContext;
use std::sync::Arc;

pub struct TestServices {
    pub context: AppContext,
    /// Present for the in-memory backend so tests can inspect committed rows
    pub memory: Option<Arc<InMemoryUnitOfWork>>,
}

/// Build services over a fresh in-memory backend
pub fn build_test_services() -> TestServices {
    let memory = Arc::new(InMemoryUnitOfWork::new());
    TestServices {
        context: AppContext::new(memory.clone()),
        memory: Some(memory),
    }
}

/// Build services over the shared PostgreSQL test pool, with migrations applied
pub fn build_pg_test_services() -> TestServices {
    let pool = get_test_db_pool();
    let db = Arc::new(Database::from_pool((*pool).clone()));
    db.run_migrations().expect("Failed to run migrations");

    TestServices {
        context: AppContext::new(Arc::new(PgUnitOfWork::new(db))),
        memory: None,
    }
}

impl TestServices {
    pub async fn committed_store_count(&self) -> usize {
        match &self.memory {
            Some(memory) => memory.snapshot().await.store_count(),
            None => panic!("committed_store_count is only available in memory"),
        }
    }
}
