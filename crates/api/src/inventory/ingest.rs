//! Equipment ingestion: validation, value resolution, status derivation and
//! the atomic insert.

use chrono::NaiveDate;
use mim_core::coerce::json_scalar_text;
use mim_core::custom_field::{resolve_submitted_values, RawFieldValue};
use mim_core::equipment::{normalize_numero_interne, parse_free_text, parse_positive_id};
use mim_core::equipment_status::derive_status;
use mim_core::error::CoreError;
use mim_db::models::equipment::{EquipmentView, NewEquipment};
use mim_db::repositories::{EquipmentRepo, EquipmentTypeRepo};
use serde::Deserialize;
use serde_json::Value;
use sqlx::PgPool;

use super::load_field_specs;
use crate::error::{unique_violation, AppError, AppResult};
use crate::middleware::auth::AuthUser;

/// Unique constraint backing `numero_interne`.
const NUMERO_CONSTRAINT: &str = "uq_equipment_numero_interne";

/// Request body for `POST /equipment`.
///
/// Every member is kept as raw JSON so that wrongly typed input reaches
/// validation instead of failing deserialization. Numbers are accepted
/// wherever text is expected.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateEquipmentRequest {
    pub numero_interne: Value,
    pub id_type: Value,
    pub affectation: Value,
    pub localisation: Value,
    pub observations: Value,
    pub custom_fields: Value,
}

/// Create an equipment and its custom field values.
///
/// `today` is the UTC calendar date used for status derivation. `actor` is
/// the authenticated principal, recorded in logs only.
pub async fn create_equipment(
    pool: &PgPool,
    input: &CreateEquipmentRequest,
    today: NaiveDate,
    actor: &AuthUser,
) -> AppResult<EquipmentView> {
    let numero_interne = normalize_numero_interne(&json_scalar_text(&input.numero_interne))?;
    let type_id = parse_positive_id(&input.id_type, "idType")?;
    let affectation = parse_free_text(&input.affectation, "affectation")?;
    let localisation = parse_free_text(&input.localisation, "localisation")?;
    let observations = parse_free_text(&input.observations, "observations")?;

    // Fast path; the unique constraint decides under concurrency.
    if EquipmentRepo::exists_by_numero(pool, &numero_interne).await? {
        return Err(duplicate_numero(&numero_interne));
    }

    let equipment_type = EquipmentTypeRepo::find_by_id(pool, type_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "EquipmentType",
            id: type_id,
        }))?;

    let specs = load_field_specs(pool, type_id).await?;
    let submitted = RawFieldValue::list_from_json(&input.custom_fields);
    let resolved = resolve_submitted_values(&specs, &submitted);
    if resolved.len() != submitted.len() {
        tracing::debug!(
            submitted = submitted.len(),
            resolved = resolved.len(),
            "Discarded unmatched or repeated custom field items"
        );
    }

    let status = derive_status(&specs, &resolved, today);

    let new_equipment = NewEquipment {
        numero_interne,
        equipment_type_id: type_id,
        affectation,
        localisation,
        observations,
        status: status.as_str().to_string(),
    };

    let equipment = EquipmentRepo::create_with_values(pool, &new_equipment, &resolved)
        .await
        .map_err(|err| match unique_violation(&err) {
            Some(constraint) if constraint == NUMERO_CONSTRAINT => {
                duplicate_numero(&new_equipment.numero_interne)
            }
            _ => AppError::Database(err),
        })?;

    tracing::info!(
        equipment_id = equipment.id,
        numero_interne = %equipment.numero_interne,
        status = %equipment.status,
        user_id = actor.user_id,
        role = %actor.role,
        "Equipment created"
    );

    Ok(EquipmentView::new(equipment, equipment_type.family))
}

fn duplicate_numero(numero_interne: &str) -> AppError {
    AppError::Core(CoreError::Conflict(format!(
        "An equipment with numeroInterne '{numero_interne}' already exists"
    )))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn optional_members_default_when_absent() {
        let request: CreateEquipmentRequest =
            serde_json::from_value(json!({ "numeroInterne": "EXT-001", "idType": 3 })).unwrap();
        assert_eq!(request.numero_interne, json!("EXT-001"));
        assert_eq!(request.id_type, json!(3));
        assert_eq!(request.affectation, Value::Null);
        assert_eq!(request.observations, Value::Null);
        assert_eq!(request.custom_fields, Value::Null);
    }

    #[test]
    fn loosely_typed_members_are_kept_raw() {
        let request: CreateEquipmentRequest = serde_json::from_value(json!({
            "numeroInterne": 12,
            "idType": "4",
            "observations": 123,
            "customFields": "not-a-list",
        }))
        .unwrap();
        assert_eq!(request.numero_interne, json!(12));
        assert_eq!(request.observations, json!(123));
        assert_eq!(request.id_type, json!("4"));
        assert!(RawFieldValue::list_from_json(&request.custom_fields).is_empty());
    }

    #[test]
    fn duplicate_numero_is_a_conflict() {
        assert_matches!(
            duplicate_numero("EXT-001"),
            AppError::Core(CoreError::Conflict(msg)) if msg.contains("EXT-001")
        );
    }
}
