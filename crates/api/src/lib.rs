//! MIM API server library.
//!
//! Exposes the core building blocks (config, state, error handling, routes,
//! inventory workflows) so integration tests and the binary entrypoint can
//! both access them.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod inventory;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
