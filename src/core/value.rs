use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value held by a control. Control values are plain JSON so they serialize
/// into chart requests without conversion.
pub type ControlValue = Value;

/// Identifier of a control inside a control table.
pub type ControlId = String;

/// Ordered control id -> value map that becomes the chart request payload.
pub type FormData = IndexMap<ControlId, ControlValue>;

/// One selectable option of a selection-type control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub value: ControlValue,
    pub label: String,
}

impl Choice {
    #[must_use]
    pub fn new(value: impl Into<ControlValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Choice whose label is the display form of its own value.
    #[must_use]
    pub fn same(value: impl Into<ControlValue>) -> Self {
        let value = value.into();
        let label = display_value(&value);
        Self { value, label }
    }
}

/// Builds choices whose label equals the value.
#[must_use]
pub fn choices_from_values<V, I>(values: I) -> Vec<Choice>
where
    V: Into<ControlValue>,
    I: IntoIterator<Item = V>,
{
    values.into_iter().map(Choice::same).collect()
}

/// Builds choices from `(value, label)` pairs.
#[must_use]
pub fn choices_from_pairs<V, I>(pairs: I) -> Vec<Choice>
where
    V: Into<ControlValue>,
    I: IntoIterator<Item = (V, &'static str)>,
{
    pairs
        .into_iter()
        .map(|(value, label)| Choice::new(value, label))
        .collect()
}

/// Renders a value the way it is shown in a plain text field.
#[must_use]
pub fn display_value(value: &ControlValue) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// `null`, empty strings, empty arrays and empty objects count as empty.
#[must_use]
pub fn is_empty_value(value: &ControlValue) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Loose equality used when matching values against choices, so that a
/// free-form `"50"` typed by a user matches a numeric `50` choice.
#[must_use]
pub fn values_match(left: &ControlValue, right: &ControlValue) -> bool {
    if left == right {
        return true;
    }
    match (left, right) {
        (Value::Number(number), Value::String(text))
        | (Value::String(text), Value::Number(number)) => {
            let trimmed = text.trim();
            match (number.as_f64(), trimmed.parse::<f64>()) {
                (Some(a), Ok(b)) => a == b,
                _ => false,
            }
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{Choice, display_value, is_empty_value, values_match};
    use serde_json::json;

    #[test]
    fn empty_values_cover_blank_strings_and_collections() {
        assert!(is_empty_value(&json!(null)));
        assert!(is_empty_value(&json!("  ")));
        assert!(is_empty_value(&json!([])));
        assert!(is_empty_value(&json!({})));
        assert!(!is_empty_value(&json!(0)));
        assert!(!is_empty_value(&json!(false)));
    }

    #[test]
    fn numeric_strings_match_numbers() {
        assert!(values_match(&json!(50), &json!("50")));
        assert!(values_match(&json!("0.4"), &json!(0.4)));
        assert!(!values_match(&json!("fifty"), &json!(50)));
    }

    #[test]
    fn same_choice_uses_plain_display_label() {
        assert_eq!(Choice::same("stack").label, "stack");
        assert_eq!(Choice::same(100).label, "100");
        assert_eq!(display_value(&json!(null)), "");
    }
}
