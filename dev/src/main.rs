use distinct::{dedup, dedup_by, Value};
use log::info;

// Scratch binary for manual experimentation; not part of the published crate.
fn main() {
    env_logger::init();

    let values = vec![
        Value::from(1_i64),
        Value::from("1"),
        Value::from_json_str(r#"{"id": 1, "name": "A"}"#).unwrap(),
        Value::from_json_str(r#"{"name": "A", "id": 1}"#).unwrap(),
        Value::from(f64::NAN),
        Value::from(f64::NAN),
        Value::from(1_i64),
    ];

    let unique = dedup(&values);
    info!("dedup kept {} of {} values", unique.len(), values.len());
    for value in &unique {
        println!("{}", value);
    }

    let by_type = dedup_by(&values, |value| match value {
        Value::Null => Value::from("null"),
        Value::Bool(_) => Value::from("bool"),
        Value::Number(_) => Value::from("number"),
        Value::Str(_) => Value::from("string"),
        Value::Array(_) => Value::from("array"),
        Value::Object(_) => Value::from("object"),
    });
    info!("one representative per variant: {} values", by_type.len());
}
