//! Repository for the `base_field_options` table.

use mim_core::custom_field::{BaseOptions, BASE_FIELDS};
use sqlx::PgPool;

use crate::models::base_field_option::{BaseFieldOption, CreateBaseFieldOption};

/// Column list for the `base_field_options` table.
const COLUMNS: &str = "id, family, field_name, value, sort_order, is_active, created_at, updated_at";

/// Family-scoped dropdown values for the base fields.
pub struct BaseFieldOptionRepo;

impl BaseFieldOptionRepo {
    /// Insert a base field option, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBaseFieldOption,
    ) -> Result<BaseFieldOption, sqlx::Error> {
        let query = format!(
            "INSERT INTO base_field_options (family, field_name, value, sort_order, is_active) \
             VALUES ($1, $2, $3, COALESCE($4, 0), COALESCE($5, true)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BaseFieldOption>(&query)
            .bind(&input.family)
            .bind(&input.field_name)
            .bind(&input.value)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Active `Localisation` and `Affectation` values for a family, each list
    /// ordered by `sort_order`, then value.
    pub async fn active_for_family(pool: &PgPool, family: &str) -> Result<BaseOptions, sqlx::Error> {
        let base_fields: Vec<String> = BASE_FIELDS.iter().map(|f| f.to_string()).collect();
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT field_name, value \
             FROM base_field_options \
             WHERE family = $1 AND is_active = true AND field_name = ANY($2) \
             ORDER BY field_name ASC, sort_order ASC, value COLLATE \"C\" ASC",
        )
        .bind(family)
        .bind(&base_fields)
        .fetch_all(pool)
        .await?;

        Ok(BaseOptions::from_pairs(rows))
    }
}
