//! Equipment lifecycle status and its derivation at creation time.

use std::fmt;

use chrono::NaiveDate;

use crate::custom_field::{FieldKind, FieldSpec, FieldValue, ResolvedFieldValue};

pub const STATUS_ACTIF: &str = "ACTIF";
pub const STATUS_RETARD: &str = "RETARD";

/// Status assigned to a newly created equipment record.
///
/// Later transitions are owned by the discrepancy workflow, which writes the
/// stored status column directly; only these two values originate here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipmentStatus {
    Actif,
    Retard,
}

impl EquipmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Actif => STATUS_ACTIF,
            Self::Retard => STATUS_RETARD,
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derive the status of a new equipment from its resolved field values.
///
/// The status is `RETARD` as soon as one alert-required date field holds a
/// date strictly before `today`; otherwise `ACTIF`. Values whose field is not
/// in `specs`, non-date fields, and absent dates never affect the result.
pub fn derive_status(
    specs: &[FieldSpec],
    values: &[ResolvedFieldValue],
    today: NaiveDate,
) -> EquipmentStatus {
    let overdue = values.iter().any(|resolved| {
        let Some(FieldValue::Date(date)) = &resolved.value else {
            return false;
        };
        specs
            .iter()
            .find(|spec| spec.id == resolved.field_id)
            .is_some_and(|spec| {
                spec.kind == FieldKind::Date && spec.alert_required && *date < today
            })
    });

    if overdue {
        EquipmentStatus::Retard
    } else {
        EquipmentStatus::Actif
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn alert_date_spec(id: i64) -> FieldSpec {
        FieldSpec {
            id,
            kind: FieldKind::Date,
            alert_required: true,
        }
    }

    fn date_value(field_id: i64, date: NaiveDate) -> ResolvedFieldValue {
        ResolvedFieldValue {
            field_id,
            value: Some(FieldValue::Date(date)),
        }
    }

    #[test]
    fn past_alert_date_is_retard() {
        let yesterday = today().pred_opt().unwrap();
        let status = derive_status(&[alert_date_spec(1)], &[date_value(1, yesterday)], today());
        assert_eq!(status, EquipmentStatus::Retard);
    }

    #[test]
    fn today_and_future_dates_stay_actif() {
        let tomorrow = today().succ_opt().unwrap();
        let specs = [alert_date_spec(1), alert_date_spec(2)];
        let values = [date_value(1, today()), date_value(2, tomorrow)];
        assert_eq!(derive_status(&specs, &values, today()), EquipmentStatus::Actif);
    }

    #[test]
    fn omitted_or_absent_dates_stay_actif() {
        let specs = [alert_date_spec(1)];
        assert_eq!(derive_status(&specs, &[], today()), EquipmentStatus::Actif);

        let absent = ResolvedFieldValue {
            field_id: 1,
            value: None,
        };
        assert_eq!(
            derive_status(&specs, &[absent], today()),
            EquipmentStatus::Actif
        );
    }

    #[test]
    fn dates_without_alert_flag_are_ignored() {
        let spec = FieldSpec {
            id: 1,
            kind: FieldKind::Date,
            alert_required: false,
        };
        let past = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(
            derive_status(&[spec], &[date_value(1, past)], today()),
            EquipmentStatus::Actif
        );
    }

    #[test]
    fn retard_is_not_reverted_by_later_fields() {
        let past = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let future = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        let specs = [alert_date_spec(1), alert_date_spec(2)];
        let values = [date_value(1, past), date_value(2, future)];
        assert_eq!(derive_status(&specs, &values, today()), EquipmentStatus::Retard);
    }

    #[test]
    fn status_labels() {
        assert_eq!(EquipmentStatus::Actif.to_string(), "ACTIF");
        assert_eq!(EquipmentStatus::Retard.as_str(), "RETARD");
    }
}
