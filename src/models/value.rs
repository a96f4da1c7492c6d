use crate::models::{Error, ScalarKey};
use crate::types::{Array, Object};
use ordered_float::OrderedFloat;
use std::fmt;

/// A dynamically-shaped value: either a scalar (null, boolean, number,
/// string) or a composite (array, object).
///
/// Scalars are compared and hashed by their own value; composites are
/// compared by deep structural equality. Object equality ignores key
/// insertion order, array equality does not ignore element order.
///
/// Numbers follow set-membership equality rather than IEEE ordered
/// comparison: `NaN` is equal to itself and `+0.0` is equal to `-0.0`.
#[derive(Clone, Debug)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Array),
    Object(Object),
}

impl Value {
    /// Whether this value is a scalar (null, boolean, number, or string).
    ///
    /// Scalars are tracked in a hash set during deduplication; everything
    /// else takes the deep-equality scan path.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// Hashable projection of a scalar value, or `None` for composites.
    pub(crate) fn scalar_key(&self) -> Option<ScalarKey> {
        match self {
            Value::Null => Some(ScalarKey::Null),
            Value::Bool(value) => Some(ScalarKey::Bool(*value)),
            Value::Number(value) => Some(ScalarKey::Number(OrderedFloat(*value))),
            Value::Str(value) => Some(ScalarKey::Str(value.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Parses a single JSON document into a `Value`.
    ///
    /// # Example
    /// ```
    /// use distinct::Value;
    ///
    /// let value = Value::from_json_str(r#"{"id": 1, "name": "A"}"#).unwrap();
    /// assert!(!value.is_scalar());
    /// ```
    pub fn from_json_str(input: &str) -> Result<Value, Error> {
        let parsed: serde_json::Value = serde_json::from_str(input)?;
        Ok(parsed.into())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            // OrderedFloat supplies the NaN-self-equal / signed-zero-equal
            // convention the scalar hash set also uses.
            (Value::Number(a), Value::Number(b)) => OrderedFloat(*a) == OrderedFloat(*b),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            // Cross-variant comparisons never coerce.
            _ => false,
        }
    }
}

impl Eq for Value {}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::Value::from(self))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Array> for Value {
    fn from(values: Array) -> Self {
        Value::Array(values)
    }
}

impl From<Object> for Value {
    fn from(entries: Object) -> Self {
        Value::Object(entries)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => {
                // JSON numbers always have an f64 view.
                number.as_f64().map_or(Value::Null, Value::Number)
            }
            serde_json::Value::String(value) => Value::Str(value),
            serde_json::Value::Array(values) => {
                Value::Array(values.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Bool(value) => serde_json::Value::Bool(*value),
            Value::Number(number) => {
                // JSON has no NaN or infinity; those render as null.
                serde_json::Number::from_f64(*number)
                    .map_or(serde_json::Value::Null, serde_json::Value::Number)
            }
            Value::Str(value) => serde_json::Value::String(value.clone()),
            Value::Array(values) => {
                serde_json::Value::Array(values.iter().map(serde_json::Value::from).collect())
            }
            Value::Object(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}
