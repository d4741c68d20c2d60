//! Free-text search over serialized rows

use serde::Serialize;
use serde_json::{Map, Value};

/// Stringify a JSON value the way a browser renders it into text.
///
/// Integral numbers drop the fraction, arrays are comma-joined and nested
/// objects collapse to `[object Object]`.
pub fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(f64::NAN);
                if f.is_finite() && f.fract() == 0.0 {
                    format!("{f:.0}")
                } else {
                    f.to_string()
                }
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Serialized top-level fields of a row (empty for non-object rows)
pub fn row_fields<T: Serialize>(row: &T) -> Map<String, Value> {
    match serde_json::to_value(row) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Whether any own field of `row`, stringified, contains `term` (case-insensitive).
///
/// An empty term matches every row. A row that does not serialize to an
/// object is stringified as a whole.
pub fn matches<T: Serialize>(row: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    match serde_json::to_value(row) {
        Ok(Value::Object(map)) => map
            .values()
            .any(|v| js_string(v).to_lowercase().contains(&needle)),
        Ok(other) => js_string(&other).to_lowercase().contains(&needle),
        Err(_) => false,
    }
}

/// Rows retained by `term`, in original order
pub fn filter_rows<'a, T: Serialize>(rows: &'a [T], term: &str) -> Vec<&'a T> {
    rows.iter().filter(|row| matches(*row, term)).collect()
}
