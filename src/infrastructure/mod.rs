pub mod client_repository;
pub mod credit_service;
pub mod entities;
pub mod system_clock;
pub mod user_repository;
