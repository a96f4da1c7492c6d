use distinct::{dedup, Value};
use log::error;
use std::io::{self, Read};

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    // Read the input text from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    // Parse one JSON value per non-empty line
    let mut values: Vec<Value> = Vec::new();
    for (line_number, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Value::from_json_str(line) {
            Ok(value) => values.push(value),
            Err(e) => {
                error!("Failed to parse line {}: {}", line_number + 1, e);
                std::process::exit(1);
            }
        }
    }

    // Print the surviving values, one per line, in first-occurrence order
    for value in dedup(&values) {
        println!("{}", value);
    }
}
