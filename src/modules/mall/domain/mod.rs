pub mod entities;
pub mod repositories;

// Re-exports for easy access
pub use entities::mall::{
    Mall, MallChanges, MallOccupancy, NewMall, DEFAULT_CAPACITY, MIN_NAME_LENGTH,
    REVENUE_PER_STORE,
};
pub use repositories::mall_repository::MallRepository;
