pub mod application;
pub mod commands;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::{MallDestroyed, MallService};
pub use domain::{Mall, MallChanges, MallOccupancy, MallRepository, NewMall};
