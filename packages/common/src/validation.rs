use crate::error::ValidationErrors;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Raw option value whose domain is checked at validation time, not at construction
pub type OptionValue = Value;

/// True for null, whitespace-only strings and empty arrays/objects
pub fn is_blank(value: &OptionValue) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(entries) => entries.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// True for a non-blank string
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|text| !text.trim().is_empty())
}

/// Enum-like string options must be one of `allowed`; blank or unset passes
pub fn validate_inclusion(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<&str>,
    allowed: &[&str],
) {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return;
    };

    if !allowed.contains(&value) {
        errors.add(field, format!("{} is not a valid {}", value, field));
    }
}

/// Tri-state flags must be `true` or `false`; blank or unset passes
pub fn validate_boolean(errors: &mut ValidationErrors, field: &str, value: &OptionValue) {
    if is_blank(value) || value.is_boolean() {
        return;
    }
    errors.add(field, "is not included in the list");
}

/// Integer options that fit an `i64`; unset passes
pub fn validate_integer(errors: &mut ValidationErrors, field: &str, value: &OptionValue) {
    if value.is_null() || value.is_i64() {
        return;
    }
    errors.add(field, "must be an integer");
}

/// Nested entity references must deserialize into `T`; unset passes
pub fn validate_type<T: DeserializeOwned>(
    errors: &mut ValidationErrors,
    field: &str,
    type_name: &str,
    value: &OptionValue,
) {
    if value.is_null() {
        return;
    }
    if serde_json::from_value::<T>(value.clone()).is_err() {
        errors.add(field, format!("is not a valid {}", type_name));
    }
}

/// The attribute-string form of a tri-state flag, `None` when blank or `false`
pub fn boolean_attribute(value: &OptionValue) -> Option<String> {
    if is_blank(value) {
        return None;
    }
    match value {
        Value::Bool(false) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
