pub mod entities;
pub mod events;
pub mod repositories;

// Re-exports for easy access
pub use entities::store::{NewStore, Store, StoreChanges};
pub use events::StoreCreated;
pub use repositories::store_repository::StoreRepository;
