//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where clients read the entity, a `Serialize` view with the wire names

pub mod base_field_option;
pub mod custom_field;
pub mod equipment;
pub mod equipment_type;
pub mod user;
