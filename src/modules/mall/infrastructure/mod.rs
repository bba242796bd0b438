pub mod memory_repository;
pub mod models;
pub mod pg_repository;

pub use models::{MallChangeset, MallModel, NewMallModel};
