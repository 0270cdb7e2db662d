pub mod handler;
pub mod hub;
