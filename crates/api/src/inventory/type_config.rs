//! Configuration payload for a single equipment type.

use mim_core::custom_field::BaseOptions;
use mim_core::error::CoreError;
use mim_core::types::DbId;
use mim_db::models::custom_field::CustomFieldConfig;
use mim_db::models::equipment_type::EquipmentType;
use mim_db::repositories::{BaseFieldOptionRepo, CustomFieldRepo, EquipmentTypeRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};

/// Type identity, family-level base options and field definitions.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeConfig {
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    pub base_options: BaseOptions,
    pub champs: Vec<CustomFieldConfig>,
}

/// Assemble the configuration of a type.
///
/// Fails with `NotFound` when the type does not exist.
pub async fn get_type_config(pool: &PgPool, type_id: DbId) -> AppResult<TypeConfig> {
    let equipment_type = EquipmentTypeRepo::find_by_id(pool, type_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EquipmentType",
            id: type_id,
        }))?;

    let base_options = BaseFieldOptionRepo::active_for_family(pool, &equipment_type.family).await?;
    let champs = CustomFieldRepo::list_config_for_type(pool, type_id).await?;

    Ok(TypeConfig {
        equipment_type,
        base_options,
        champs,
    })
}
