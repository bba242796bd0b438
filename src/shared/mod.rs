// Shared Kernel
// Cross-module concerns: errors, validation, persistence seams and infrastructure.

pub mod config; // Environment-driven configuration
pub mod errors; // Shared error types
pub mod infrastructure; // Database pool and unit-of-work implementations
pub mod persistence; // Repository traits and transactional scoping
pub mod utils; // Logging
pub mod validation; // Field validation chain

// Re-exports for convenience
pub use config::{AppConfig, StorageBackend};
pub use errors::{AppError, AppResult};
pub use infrastructure::database::Database;
pub use persistence::{Transaction, UnitOfWork};
pub use validation::ValidationErrors;
