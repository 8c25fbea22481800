//! Repository for the `equipment` and `custom_field_values` tables.

use mim_core::custom_field::{FieldValue, ResolvedFieldValue};
use mim_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::equipment::{value_columns, CustomFieldValueRow, Equipment, NewEquipment};

/// Column list for the `equipment` table.
const COLUMNS: &str = "id, numero_interne, equipment_type_id, affectation, localisation, \
    observations, status, created_at, updated_at";

/// Column list for the `custom_field_values` table.
const VALUE_COLUMNS: &str = "id, equipment_id, custom_field_id, text_value, date_value, \
    number_value, created_at, updated_at";

/// Equipment persistence, including the atomic equipment + values insert.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Whether an equipment with exactly this internal number exists.
    pub async fn exists_by_numero(pool: &PgPool, numero_interne: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM equipment WHERE numero_interne = $1)")
                .bind(numero_interne)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Find an equipment by its internal number.
    pub async fn find_by_numero(
        pool: &PgPool,
        numero_interne: &str,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE numero_interne = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(numero_interne)
            .fetch_optional(pool)
            .await
    }

    /// Insert an equipment row and one value row per present resolved value,
    /// in a single transaction.
    ///
    /// Values resolved to `None` are skipped. If any insert fails the
    /// transaction is dropped uncommitted and nothing is persisted. A
    /// duplicate `numero_interne` surfaces as a unique violation on
    /// `uq_equipment_numero_interne`.
    pub async fn create_with_values(
        pool: &PgPool,
        input: &NewEquipment,
        values: &[ResolvedFieldValue],
    ) -> Result<Equipment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO equipment \
                (numero_interne, equipment_type_id, affectation, localisation, observations, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let equipment = sqlx::query_as::<_, Equipment>(&insert_query)
            .bind(&input.numero_interne)
            .bind(input.equipment_type_id)
            .bind(&input.affectation)
            .bind(&input.localisation)
            .bind(&input.observations)
            .bind(&input.status)
            .fetch_one(&mut *tx)
            .await?;

        let mut written = 0usize;
        for resolved in values {
            if let Some(value) = &resolved.value {
                Self::insert_value_inner(&mut tx, equipment.id, resolved.field_id, value).await?;
                written += 1;
            }
        }

        tx.commit().await?;
        tracing::debug!(
            equipment_id = equipment.id,
            value_rows = written,
            "Committed equipment with custom field values"
        );
        Ok(equipment)
    }

    /// All stored custom field values of an equipment, in field id order.
    pub async fn list_values(
        pool: &PgPool,
        equipment_id: DbId,
    ) -> Result<Vec<CustomFieldValueRow>, sqlx::Error> {
        let query = format!(
            "SELECT {VALUE_COLUMNS} FROM custom_field_values \
             WHERE equipment_id = $1 \
             ORDER BY custom_field_id ASC"
        );
        sqlx::query_as::<_, CustomFieldValueRow>(&query)
            .bind(equipment_id)
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn insert_value_inner(
        tx: &mut Transaction<'_, Postgres>,
        equipment_id: DbId,
        custom_field_id: DbId,
        value: &FieldValue,
    ) -> Result<(), sqlx::Error> {
        let (text_value, date_value, number_value) = value_columns(value);
        sqlx::query(
            "INSERT INTO custom_field_values \
                (equipment_id, custom_field_id, text_value, date_value, number_value) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(equipment_id)
        .bind(custom_field_id)
        .bind(text_value)
        .bind(date_value)
        .bind(number_value)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }
}
