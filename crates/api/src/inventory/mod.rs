//! Equipment inventory workflows.
//!
//! Orchestrates the repositories and the pure resolution rules from
//! `mim_core` into the two operations clients drive:
//!
//! - [`type_config::get_type_config`] -- everything a form needs to submit an
//!   equipment of a given type.
//! - [`ingest::create_equipment`] -- validate, resolve, derive status and
//!   persist an equipment with its custom field values.

pub mod ingest;
pub mod type_config;

use mim_core::custom_field::FieldSpec;
use mim_core::types::DbId;
use mim_db::repositories::CustomFieldRepo;
use sqlx::PgPool;

/// Resolution specs for the fields of a type, in id order.
///
/// Definitions whose stored kind is unknown are skipped; submitted values
/// for them are discarded like any unmatched field.
pub(crate) async fn load_field_specs(
    pool: &PgPool,
    equipment_type_id: DbId,
) -> Result<Vec<FieldSpec>, sqlx::Error> {
    let fields = CustomFieldRepo::list_for_type(pool, equipment_type_id).await?;
    Ok(fields
        .iter()
        .filter_map(|field| {
            let spec = field.spec();
            if spec.is_none() {
                tracing::warn!(
                    field_id = field.id,
                    data_kind = %field.data_kind,
                    "Skipping custom field with unknown data kind"
                );
            }
            spec
        })
        .collect())
}
