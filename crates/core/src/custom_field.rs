//! Custom field kinds, submitted-value resolution, and base dropdown fields.
//!
//! Each equipment type owns a set of custom field definitions. A definition
//! declares a [`FieldKind`]; values submitted by clients are coerced into a
//! [`FieldValue`] of exactly that kind. Resolution is lenient: a value that
//! cannot be coerced becomes absent instead of failing the submission.

use std::sync::LazyLock;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::{json_integer, json_number, json_text, truncate_to_i64};
use crate::types::DbId;

/// Strict `YYYY-MM-DD` literal (ASCII digits only).
static DATE_RE: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("valid regex")
});

// ---------------------------------------------------------------------------
// Field kinds
// ---------------------------------------------------------------------------

/// Stored identifier for text fields.
pub const KIND_TEXT: &str = "Texte";
/// Stored identifier for date fields.
pub const KIND_DATE: &str = "Date";
/// Stored identifier for number fields.
pub const KIND_NUMBER: &str = "Nombre";

pub const VALID_FIELD_KINDS: &[&str] = &[KIND_TEXT, KIND_DATE, KIND_NUMBER];

/// The declared data kind of a custom field definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Number,
}

impl FieldKind {
    /// Parse the stored kind identifier. Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim() {
            KIND_TEXT => Ok(Self::Text),
            KIND_DATE => Ok(Self::Date),
            KIND_NUMBER => Ok(Self::Number),
            other => Err(format!(
                "Invalid field kind '{other}'. Must be one of: {}",
                VALID_FIELD_KINDS.join(", ")
            )),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => KIND_TEXT,
            Self::Date => KIND_DATE,
            Self::Number => KIND_NUMBER,
        }
    }
}

/// The subset of a field definition that drives value resolution and
/// status derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: DbId,
    pub kind: FieldKind,
    pub alert_required: bool,
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A resolved custom field value. The variant always matches the kind of the
/// definition it was resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Number(i64),
}

/// Outcome of resolving one submitted item against its definition.
///
/// `value` is `None` when the submitted content could not be coerced to the
/// definition's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFieldValue {
    pub field_id: DbId,
    pub value: Option<FieldValue>,
}

/// One entry of the `customFields` array as submitted by a client.
///
/// Every slot is kept as raw JSON; coercion happens in
/// [`resolve_submitted_value`] once the field's kind is known.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawFieldValue {
    #[serde(rename = "idChamp", default)]
    pub field_id: Value,
    #[serde(rename = "valeurTexte", default)]
    pub text: Value,
    #[serde(rename = "valeurDate", default)]
    pub date: Value,
    #[serde(rename = "valeurNombre", default)]
    pub number: Value,
}

impl RawFieldValue {
    /// Read the `customFields` payload. Anything other than an array is
    /// treated as empty, and array items that are not objects are dropped.
    pub fn list_from_json(value: &Value) -> Vec<RawFieldValue> {
        let Value::Array(items) = value else {
            return Vec::new();
        };
        items
            .iter()
            .filter(|item| item.is_object())
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect()
    }

    /// The referenced field id, if it is an integer.
    pub fn field_id(&self) -> Option<DbId> {
        json_integer(&self.field_id)
    }
}

/// Parse a strict `YYYY-MM-DD` date that must exist on the calendar.
///
/// `2024-02-30`, `2023-13-01` and `23-1-1` all yield `None`. Years below 100
/// are rejected as well.
pub fn parse_date_only(raw: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(raw.trim())?;
    let year: i32 = caps[1].parse().ok()?;
    if year < 100 {
        return None;
    }
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Resolve a submitted item against the definition it references.
///
/// The caller is responsible for matching `raw` to `spec`; see
/// [`resolve_submitted_values`] for the whole-payload variant.
pub fn resolve_submitted_value(spec: &FieldSpec, raw: &RawFieldValue) -> ResolvedFieldValue {
    let value = match spec.kind {
        FieldKind::Text => Some(FieldValue::Text(json_text(&raw.text))),
        FieldKind::Date => match &raw.date {
            Value::String(s) => parse_date_only(s).map(FieldValue::Date),
            _ => None,
        },
        FieldKind::Number => json_number(&raw.number)
            .and_then(truncate_to_i64)
            .map(FieldValue::Number),
    };
    ResolvedFieldValue {
        field_id: spec.id,
        value,
    }
}

/// Resolve every submitted item against the definitions of one type.
///
/// Items that do not reference one of `specs` are discarded. When a field is
/// submitted more than once the last occurrence wins, keeping the position of
/// the first.
pub fn resolve_submitted_values(
    specs: &[FieldSpec],
    raws: &[RawFieldValue],
) -> Vec<ResolvedFieldValue> {
    let mut resolved: Vec<ResolvedFieldValue> = Vec::with_capacity(raws.len());
    for raw in raws {
        let Some(spec) = raw
            .field_id()
            .and_then(|id| specs.iter().find(|s| s.id == id))
        else {
            continue;
        };
        let value = resolve_submitted_value(spec, raw);
        match resolved.iter().position(|r| r.field_id == value.field_id) {
            Some(idx) => resolved[idx] = value,
            None => resolved.push(value),
        }
    }
    resolved
}

// ---------------------------------------------------------------------------
// Base fields
// ---------------------------------------------------------------------------

/// Base field offering family-scoped location options.
pub const BASE_FIELD_LOCALISATION: &str = "Localisation";
/// Base field offering family-scoped assignment options.
pub const BASE_FIELD_AFFECTATION: &str = "Affectation";

pub const BASE_FIELDS: &[&str] = &[BASE_FIELD_LOCALISATION, BASE_FIELD_AFFECTATION];

/// Ordered option values for the two base fields of a family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BaseOptions {
    pub localisation: Vec<String>,
    pub affectation: Vec<String>,
}

impl BaseOptions {
    /// Split `(field_name, value)` pairs, already ordered, into the two lists.
    /// Pairs for any other field name are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut options = Self::default();
        for (field_name, value) in pairs {
            match field_name.as_str() {
                BASE_FIELD_LOCALISATION => options.localisation.push(value),
                BASE_FIELD_AFFECTATION => options.affectation.push(value),
                _ => {}
            }
        }
        options
    }
}
