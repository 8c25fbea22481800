//! Family-scoped options for the `Localisation` and `Affectation` base fields.

use mim_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `base_field_options` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BaseFieldOption {
    pub id: DbId,
    pub family: String,
    pub field_name: String,
    pub value: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for provisioning a base field option.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBaseFieldOption {
    pub family: String,
    pub field_name: String,
    pub value: String,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
