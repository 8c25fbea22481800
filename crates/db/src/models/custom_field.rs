//! Custom field definition model, its client-facing configuration shape,
//! and provisioning DTOs for placeholders and dropdown options.

use mim_core::custom_field::{FieldKind, FieldSpec};
use mim_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `custom_fields` table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomField {
    pub id: DbId,
    pub equipment_type_id: DbId,
    pub name: String,
    /// Stored kind identifier (`Texte`, `Date` or `Nombre`).
    pub data_kind: String,
    pub alert_required: bool,
    pub visible_in_table: bool,
    pub uses_dropdown: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CustomField {
    /// Resolution view of this definition, or `None` if the stored kind is
    /// not one the engine knows how to coerce.
    pub fn spec(&self) -> Option<FieldSpec> {
        let kind = FieldKind::parse(&self.data_kind).ok()?;
        Some(FieldSpec {
            id: self.id,
            kind,
            alert_required: self.alert_required,
        })
    }
}

/// A field definition as offered to clients before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldConfig {
    pub id_champ: DbId,
    pub nom_champ: String,
    pub type_donnees: String,
    pub est_requis_pour_alerte: bool,
    pub afficher_dans_tableau: bool,
    pub utilise_liste_deroulante: bool,
    /// Empty when no placeholder is configured.
    pub placeholder: String,
    /// Active dropdown values in display order; empty unless the field
    /// uses a dropdown.
    pub valeurs_liste: Vec<String>,
}

impl CustomFieldConfig {
    pub fn new(field: CustomField, placeholder: String, values: Vec<String>) -> Self {
        let valeurs_liste = if field.uses_dropdown {
            values
        } else {
            Vec::new()
        };
        Self {
            id_champ: field.id,
            nom_champ: field.name,
            type_donnees: field.data_kind,
            est_requis_pour_alerte: field.alert_required,
            afficher_dans_tableau: field.visible_in_table,
            utilise_liste_deroulante: field.uses_dropdown,
            placeholder,
            valeurs_liste,
        }
    }
}

/// DTO for provisioning a custom field definition.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCustomField {
    pub equipment_type_id: DbId,
    pub name: String,
    pub data_kind: String,
    pub alert_required: Option<bool>,
    pub visible_in_table: Option<bool>,
    pub uses_dropdown: Option<bool>,
}

/// DTO for provisioning a dropdown value of a custom field.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFieldOption {
    pub custom_field_id: DbId,
    pub value: String,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}
