//! Authentication primitives.
//!
//! - [`password`] -- legacy SHA-256 password digest and verification.
//! - [`jwt`] -- JWT access-token generation and validation.

pub mod jwt;
pub mod password;
