/// Shared infrastructure concerns
///
/// Connection pooling plus the two unit-of-work backends. The per-table
/// repository code lives in each module's `infrastructure` directory.
pub mod database;
pub mod memory_unit_of_work;
pub mod pg_unit_of_work;

// Re-exports for convenience
pub use database::Database;
pub use memory_unit_of_work::{InMemoryUnitOfWork, MemoryTables, MemoryTransaction};
pub use pg_unit_of_work::{PgTransaction, PgUnitOfWork};
