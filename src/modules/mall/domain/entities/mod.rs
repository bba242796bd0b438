pub mod mall;
