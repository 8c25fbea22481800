//! Equipment type model, DTOs, and the family grouping returned to clients.

use mim_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `equipment_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct EquipmentType {
    #[serde(rename = "idType")]
    pub id: DbId,
    #[serde(rename = "nomType")]
    pub name: String,
    #[serde(rename = "famille")]
    pub family: String,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

/// Type entry inside a [`TypeFamily`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSummary {
    #[serde(rename = "idType")]
    pub id: DbId,
    #[serde(rename = "nomType")]
    pub name: String,
}

/// All types of one family, in type-name order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeFamily {
    #[serde(rename = "famille")]
    pub family: String,
    pub types: Vec<TypeSummary>,
}

impl TypeFamily {
    /// Group types already sorted by `(family, name)` into families,
    /// preserving that order.
    pub fn group(types: Vec<EquipmentType>) -> Vec<TypeFamily> {
        let mut families: Vec<TypeFamily> = Vec::new();
        for t in types {
            let summary = TypeSummary {
                id: t.id,
                name: t.name,
            };
            match families.last_mut() {
                Some(last) if last.family == t.family => last.types.push(summary),
                _ => families.push(TypeFamily {
                    family: t.family,
                    types: vec![summary],
                }),
            }
        }
        families
    }
}

/// DTO for provisioning a new equipment type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEquipmentType {
    pub name: String,
    pub family: String,
}
