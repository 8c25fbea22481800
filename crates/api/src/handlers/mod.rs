pub mod auth;
pub mod equipment;
