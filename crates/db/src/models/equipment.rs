//! Equipment and custom field value models.
//!
//! Custom field values are a sum type in the domain ([`FieldValue`]) but are
//! stored as three nullable columns; the conversion lives here and nowhere
//! else.

use chrono::NaiveDate;
use mim_core::custom_field::FieldValue;
use mim_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `equipment` table.
#[derive(Debug, Clone, FromRow)]
pub struct Equipment {
    pub id: DbId,
    pub numero_interne: String,
    pub equipment_type_id: DbId,
    pub affectation: String,
    pub localisation: String,
    pub observations: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Insert payload for an equipment row. Built by the ingestion path after
/// validation and status derivation, never deserialized from clients.
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub numero_interne: String,
    pub equipment_type_id: DbId,
    pub affectation: String,
    pub localisation: String,
    pub observations: String,
    pub status: String,
}

/// Materialized view of an equipment record returned after creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentView {
    pub id_equipement: DbId,
    pub numero_interne: String,
    pub affectation: String,
    pub localisation: String,
    pub observations: String,
    pub famille: String,
    pub status: String,
    pub id_type: DbId,
    pub date_creation: Timestamp,
}

impl EquipmentView {
    pub fn new(equipment: Equipment, family: String) -> Self {
        Self {
            id_equipement: equipment.id,
            numero_interne: equipment.numero_interne,
            affectation: equipment.affectation,
            localisation: equipment.localisation,
            observations: equipment.observations,
            famille: family,
            status: equipment.status,
            id_type: equipment.equipment_type_id,
            date_creation: equipment.created_at,
        }
    }
}

/// A row from the `custom_field_values` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CustomFieldValueRow {
    pub id: DbId,
    pub equipment_id: DbId,
    pub custom_field_id: DbId,
    pub text_value: Option<String>,
    pub date_value: Option<NaiveDate>,
    pub number_value: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CustomFieldValueRow {
    /// Read the populated slot back into a [`FieldValue`].
    ///
    /// The table's check constraint guarantees exactly one slot is set.
    pub fn value(&self) -> Option<FieldValue> {
        match (&self.text_value, self.date_value, self.number_value) {
            (Some(text), None, None) => Some(FieldValue::Text(text.clone())),
            (None, Some(date), None) => Some(FieldValue::Date(date)),
            (None, None, Some(number)) => Some(FieldValue::Number(number)),
            _ => None,
        }
    }
}

/// Storage columns `(text_value, date_value, number_value)` for a value.
pub fn value_columns(value: &FieldValue) -> (Option<&str>, Option<NaiveDate>, Option<i64>) {
    match value {
        FieldValue::Text(text) => (Some(text.as_str()), None, None),
        FieldValue::Date(date) => (None, Some(*date), None),
        FieldValue::Number(number) => (None, None, Some(*number)),
    }
}
