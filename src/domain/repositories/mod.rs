pub mod client_repository;
pub mod user_repository;
