pub mod event_handlers;
pub mod service;

pub use event_handlers::{credit_store_revenue, on_store_created};
pub use service::{MallDestroyed, MallService};
