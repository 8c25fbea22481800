//! Domain logic for the equipment inventory backend.
//!
//! Everything in this crate is pure: no I/O, no database access. The db and
//! api crates feed it rows and request payloads and persist what it returns.

pub mod coerce;
pub mod custom_field;
pub mod equipment;
pub mod equipment_status;
pub mod error;
pub mod types;
