pub mod mall_repository;
