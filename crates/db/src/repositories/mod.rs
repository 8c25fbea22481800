//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod base_field_option_repo;
pub mod custom_field_repo;
pub mod equipment_repo;
pub mod equipment_type_repo;
pub mod user_repo;

pub use base_field_option_repo::BaseFieldOptionRepo;
pub use custom_field_repo::CustomFieldRepo;
pub use equipment_repo::EquipmentRepo;
pub use equipment_type_repo::EquipmentTypeRepo;
pub use user_repo::UserRepo;
