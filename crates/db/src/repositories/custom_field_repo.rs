//! Repository for `custom_fields` and its satellite tables
//! (`custom_field_placeholders`, `custom_field_options`).

use std::collections::HashMap;

use mim_core::types::DbId;
use sqlx::PgPool;

use crate::models::custom_field::{
    CreateCustomField, CreateFieldOption, CustomField, CustomFieldConfig,
};

/// Column list for the `custom_fields` table.
const COLUMNS: &str = "id, equipment_type_id, name, data_kind, alert_required, \
    visible_in_table, uses_dropdown, created_at, updated_at";

/// Field definitions per equipment type, with placeholders and dropdown values.
pub struct CustomFieldRepo;

impl CustomFieldRepo {
    /// Insert a new field definition.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCustomField,
    ) -> Result<CustomField, sqlx::Error> {
        let query = format!(
            "INSERT INTO custom_fields \
                (equipment_type_id, name, data_kind, alert_required, visible_in_table, uses_dropdown) \
             VALUES ($1, $2, $3, COALESCE($4, false), COALESCE($5, false), COALESCE($6, false)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CustomField>(&query)
            .bind(input.equipment_type_id)
            .bind(&input.name)
            .bind(&input.data_kind)
            .bind(input.alert_required)
            .bind(input.visible_in_table)
            .bind(input.uses_dropdown)
            .fetch_one(pool)
            .await
    }

    /// Set (or replace) the placeholder text of a field.
    pub async fn set_placeholder(
        pool: &PgPool,
        custom_field_id: DbId,
        placeholder_text: Option<&str>,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO custom_field_placeholders (custom_field_id, placeholder_text) \
             VALUES ($1, $2) \
             ON CONFLICT (custom_field_id) DO UPDATE SET placeholder_text = EXCLUDED.placeholder_text",
        )
        .bind(custom_field_id)
        .bind(placeholder_text)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Add a dropdown value to a field, returning its id.
    pub async fn add_option(pool: &PgPool, input: &CreateFieldOption) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO custom_field_options (custom_field_id, value, sort_order, is_active) \
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, true)) \
             RETURNING id",
        )
        .bind(input.custom_field_id)
        .bind(&input.value)
        .bind(input.sort_order)
        .bind(input.is_active)
        .fetch_one(pool)
        .await?;
        Ok(id)
    }

    /// All field definitions of a type, in id order.
    pub async fn list_for_type(
        pool: &PgPool,
        equipment_type_id: DbId,
    ) -> Result<Vec<CustomField>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM custom_fields \
             WHERE equipment_type_id = $1 \
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, CustomField>(&query)
            .bind(equipment_type_id)
            .fetch_all(pool)
            .await
    }

    /// Placeholder text per field id for the fields of a type.
    ///
    /// Fields without a placeholder row, or with a NULL text, map to `""`.
    pub async fn placeholders_for_type(
        pool: &PgPool,
        equipment_type_id: DbId,
    ) -> Result<HashMap<DbId, String>, sqlx::Error> {
        let rows: Vec<(DbId, Option<String>)> = sqlx::query_as(
            "SELECT p.custom_field_id, p.placeholder_text \
             FROM custom_field_placeholders p \
             JOIN custom_fields f ON f.id = p.custom_field_id \
             WHERE f.equipment_type_id = $1",
        )
        .bind(equipment_type_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, text)| (id, text.unwrap_or_default()))
            .collect())
    }

    /// Active dropdown values for the given fields, grouped by field id and
    /// ordered by `sort_order`, then value.
    pub async fn active_options_for_fields(
        pool: &PgPool,
        custom_field_ids: &[DbId],
    ) -> Result<HashMap<DbId, Vec<String>>, sqlx::Error> {
        if custom_field_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(DbId, String)> = sqlx::query_as(
            "SELECT custom_field_id, value \
             FROM custom_field_options \
             WHERE is_active = true AND custom_field_id = ANY($1) \
             ORDER BY custom_field_id ASC, sort_order ASC, value COLLATE \"C\" ASC",
        )
        .bind(custom_field_ids)
        .fetch_all(pool)
        .await?;

        let mut by_field: HashMap<DbId, Vec<String>> = HashMap::new();
        for (field_id, value) in rows {
            by_field.entry(field_id).or_default().push(value);
        }
        Ok(by_field)
    }

    /// Field definitions of a type with placeholder and dropdown values
    /// attached, ready to be offered to clients.
    pub async fn list_config_for_type(
        pool: &PgPool,
        equipment_type_id: DbId,
    ) -> Result<Vec<CustomFieldConfig>, sqlx::Error> {
        let fields = Self::list_for_type(pool, equipment_type_id).await?;
        let mut placeholders = Self::placeholders_for_type(pool, equipment_type_id).await?;

        let dropdown_ids: Vec<DbId> = fields
            .iter()
            .filter(|f| f.uses_dropdown)
            .map(|f| f.id)
            .collect();
        let mut options = Self::active_options_for_fields(pool, &dropdown_ids).await?;

        Ok(fields
            .into_iter()
            .map(|field| {
                let placeholder = placeholders.remove(&field.id).unwrap_or_default();
                let values = options.remove(&field.id).unwrap_or_default();
                CustomFieldConfig::new(field, placeholder, values)
            })
            .collect())
    }
}
