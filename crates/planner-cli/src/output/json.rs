use serde_json::Value;

/// Pretty-print JSON to stdout. Serialization failure still produces a
/// line of output on stderr rather than silence.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
