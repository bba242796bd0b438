pub mod mall;
pub mod store;
