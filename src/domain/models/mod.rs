pub mod client;
pub mod registration;
pub mod user;
