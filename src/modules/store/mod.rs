pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::StoreService;
pub use domain::{NewStore, Store, StoreChanges, StoreCreated, StoreRepository};
