use distinct::Value;
use std::error::Error;
use std::fs;

/// Utility to load a dedup fixture file for testing and benchmarking.
///
/// A fixture is a JSON object with an `input` array and an `expected` array;
/// `expected` holds the result of deduplicating `input`.
pub fn load_dedup_fixture(file_path: &str) -> Result<(Vec<Value>, Vec<Value>), Box<dyn Error>> {
    let content = fs::read_to_string(file_path)?;
    let parsed: serde_json::Value = serde_json::from_str(&content)?;

    let input = extract_values(&parsed, "input", file_path)?;
    let expected = extract_values(&parsed, "expected", file_path)?;

    Ok((input, expected))
}

fn extract_values(
    fixture: &serde_json::Value,
    field: &str,
    file_path: &str,
) -> Result<Vec<Value>, Box<dyn Error>> {
    match fixture.get(field) {
        Some(serde_json::Value::Array(values)) => {
            Ok(values.iter().cloned().map(Value::from).collect())
        }
        _ => Err(format!("Fixture {} is missing an `{}` array", file_path, field).into()),
    }
}

/// Helper to build a `Value` from inline JSON in tests. Panics on malformed
/// JSON, which is acceptable for hand-written test literals.
pub fn json(input: &str) -> Value {
    Value::from_json_str(input).expect("Failed to parse test JSON literal")
}

/// Helper to build a `Vec<Value>` from a JSON array literal.
pub fn json_values(input: &str) -> Vec<Value> {
    match json(input) {
        Value::Array(values) => values,
        other => panic!("Expected a JSON array literal, got: {}", other),
    }
}
