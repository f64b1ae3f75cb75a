pub mod clock;
pub mod credit_service;
