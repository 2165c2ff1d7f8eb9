//! JSON to record conversion

use super::error::{JsonError, JsonResult};
use crate::core::{Record, Value};
use log::debug;
use serde_json::Value as JsonValue;

/// Converts JSON values to the scalar [`Value`] enum
pub struct JsonToValueConverter;

impl JsonToValueConverter {
    /// Convert a single JSON value.
    ///
    /// Nested arrays and objects have no scalar form; they are kept as their
    /// JSON text.
    pub fn convert(json_value: &JsonValue) -> Value {
        match json_value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Boolean(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => n.as_f64().map(Value::Float).unwrap_or(Value::Null),
            },
            JsonValue::String(s) => Value::Text(s.clone()),
            JsonValue::Array(_) | JsonValue::Object(_) => Value::Text(json_value.to_string()),
        }
    }

    /// Convert one JSON object to a record
    pub fn json_to_record(json_obj: &JsonValue) -> JsonResult<Record> {
        let obj = json_obj
            .as_object()
            .ok_or_else(|| JsonError::InvalidStructure("Expected JSON object".into()))?;

        Ok(obj
            .iter()
            .map(|(name, value)| (name.as_str(), Self::convert(value)))
            .collect())
    }
}

/// Parse a JSON array of objects into records.
pub fn records_from_json(text: &str) -> JsonResult<Vec<Record>> {
    let document: JsonValue = serde_json::from_str(text)?;
    let items = document
        .as_array()
        .ok_or_else(|| JsonError::InvalidStructure("Expected a JSON array of objects".into()))?;

    let records = items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            JsonToValueConverter::json_to_record(item).map_err(|_| {
                JsonError::InvalidStructure(format!("Element {} is not an object", position))
            })
        })
        .collect::<JsonResult<Vec<_>>>()?;

    debug!("parsed {} records from JSON", records.len());
    Ok(records)
}

/// Serialize records as a pretty-printed JSON array.
pub fn records_to_json(records: &[Record]) -> JsonResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Interpret a command-line literal: JSON scalars keep their type, anything
/// else is taken as text.
///
/// ```
/// use rankshift::{Value, json::value_from_literal};
///
/// assert_eq!(value_from_literal("42"), Value::Integer(42));
/// assert_eq!(value_from_literal("\"42\""), Value::from("42"));
/// assert_eq!(value_from_literal("abc"), Value::from("abc"));
/// ```
pub fn value_from_literal(literal: &str) -> Value {
    match serde_json::from_str::<JsonValue>(literal) {
        Ok(json) if !json.is_array() && !json.is_object() => JsonToValueConverter::convert(&json),
        _ => Value::Text(literal.to_string()),
    }
}
