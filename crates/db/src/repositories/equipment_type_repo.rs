//! Repository for the `equipment_types` table.

use mim_core::types::DbId;
use sqlx::PgPool;

use crate::models::equipment_type::{CreateEquipmentType, EquipmentType, TypeFamily};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, family, created_at, updated_at";

/// Read access to the type catalog, plus an insert used for provisioning.
pub struct EquipmentTypeRepo;

impl EquipmentTypeRepo {
    /// Insert a new equipment type, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateEquipmentType,
    ) -> Result<EquipmentType, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment_types (name, family) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EquipmentType>(&query)
            .bind(&input.name)
            .bind(&input.family)
            .fetch_one(pool)
            .await
    }

    /// Find an equipment type by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<EquipmentType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment_types WHERE id = $1");
        sqlx::query_as::<_, EquipmentType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all types ordered by family, then name (byte order, as stored).
    pub async fn list(pool: &PgPool) -> Result<Vec<EquipmentType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM equipment_types \
             ORDER BY family COLLATE \"C\" ASC, name COLLATE \"C\" ASC"
        );
        sqlx::query_as::<_, EquipmentType>(&query)
            .fetch_all(pool)
            .await
    }

    /// List all types grouped by family.
    pub async fn list_families(pool: &PgPool) -> Result<Vec<TypeFamily>, sqlx::Error> {
        let types = Self::list(pool).await?;
        Ok(TypeFamily::group(types))
    }
}
