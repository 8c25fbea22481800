//! Lenient coercion of loosely-typed JSON request values.
//!
//! Clients submit identifiers and numbers either as JSON numbers or as
//! numeric strings. These helpers accept both and return `None` for anything
//! that cannot be read as the requested shape; callers decide whether that
//! is an error or simply "absent".

use serde_json::Value;

/// Read a JSON number, or a string that parses as one.
///
/// Strings are trimmed first; an empty string is not a number. `null`,
/// booleans, arrays and objects yield `None`. The result may be non-finite
/// (e.g. the string `"inf"`), so callers that need a finite value must check.
pub fn json_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()
        }
        _ => None,
    }
}

/// Truncate a finite float toward zero into an `i64`.
///
/// Returns `None` for NaN, infinities and values outside the `i64` range.
pub fn truncate_to_i64(n: f64) -> Option<i64> {
    if !n.is_finite() {
        return None;
    }
    let truncated = n.trunc();
    // i64::MAX is not representable as f64; 2^63 is the first value out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Read a JSON value as an exact integer.
///
/// Accepts integral JSON numbers (`3`, `3.0`) and strings holding one
/// (`"3"`). Fractional values are rejected rather than truncated.
pub fn json_integer(value: &Value) -> Option<i64> {
    if let Value::Number(n) = value {
        if let Some(i) = n.as_i64() {
            return Some(i);
        }
    }
    let n = json_number(value)?;
    if n.fract() != 0.0 {
        return None;
    }
    truncate_to_i64(n)
}

/// Read a JSON value as trimmed text; anything that is not a string is empty.
///
/// NUL characters are dropped: PostgreSQL `TEXT` cannot store them.
pub fn json_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.replace('\0', "").trim().to_string(),
        _ => String::new(),
    }
}

/// Read a string or number as text, untouched otherwise.
///
/// Integral numbers render without a fractional part (`7`, `7.0` -> `"7"`).
/// `null`, booleans, arrays and objects yield an empty string.
pub fn json_scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
                    Some(f) => f.to_string(),
                    None => String::new(),
                }
            }
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn number_accepts_numbers_and_numeric_strings() {
        assert_eq!(json_number(&json!(12.5)), Some(12.5));
        assert_eq!(json_number(&json!(" 7 ")), Some(7.0));
        assert_eq!(json_number(&json!("-3.25")), Some(-3.25));
    }

    #[test]
    fn number_rejects_non_numeric_shapes() {
        assert_eq!(json_number(&json!(null)), None);
        assert_eq!(json_number(&json!(true)), None);
        assert_eq!(json_number(&json!("")), None);
        assert_eq!(json_number(&json!("   ")), None);
        assert_eq!(json_number(&json!("douze")), None);
        assert_eq!(json_number(&json!([1])), None);
    }

    #[test]
    fn truncation_goes_toward_zero() {
        assert_eq!(truncate_to_i64(3.9), Some(3));
        assert_eq!(truncate_to_i64(-3.9), Some(-3));
        assert_eq!(truncate_to_i64(0.0), Some(0));
    }

    #[test]
    fn truncation_rejects_non_finite_and_out_of_range() {
        assert_eq!(truncate_to_i64(f64::NAN), None);
        assert_eq!(truncate_to_i64(f64::INFINITY), None);
        assert_eq!(truncate_to_i64(1e30), None);
    }

    #[test]
    fn integer_requires_integral_value() {
        assert_eq!(json_integer(&json!(4)), Some(4));
        assert_eq!(json_integer(&json!(4.0)), Some(4));
        assert_eq!(json_integer(&json!("12")), Some(12));
        assert_eq!(json_integer(&json!(4.5)), None);
        assert_eq!(json_integer(&json!("abc")), None);
        assert_eq!(json_integer(&json!(null)), None);
    }

    #[test]
    fn text_is_trimmed_and_defaults_to_empty() {
        assert_eq!(json_text(&json!("  Rouge  ")), "Rouge");
        assert_eq!(json_text(&json!(null)), "");
        assert_eq!(json_text(&json!(42)), "");
    }

    #[test]
    fn text_drops_nul_characters() {
        assert_eq!(json_text(&json!("a\0b")), "ab");
        assert_eq!(json_text(&json!(" \0 ")), "");
    }

    #[test]
    fn scalar_text_renders_strings_and_numbers() {
        assert_eq!(json_scalar_text(&json!(" Atelier ")), " Atelier ");
        assert_eq!(json_scalar_text(&json!(7)), "7");
        assert_eq!(json_scalar_text(&json!(7.0)), "7");
        assert_eq!(json_scalar_text(&json!(-12)), "-12");
        assert_eq!(json_scalar_text(&json!(2.5)), "2.5");
        assert_eq!(json_scalar_text(&json!(u64::MAX)), u64::MAX.to_string());
    }

    #[test]
    fn scalar_text_is_empty_for_other_shapes() {
        for value in [json!(null), json!(false), json!([1]), json!({ "a": 1 })] {
            assert_eq!(json_scalar_text(&value), "", "{value} should be empty");
        }
    }
}
