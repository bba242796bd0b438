pub mod service;

pub use service::StoreService;
