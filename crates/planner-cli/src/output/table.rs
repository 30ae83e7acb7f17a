use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::format_value;

/// Format output as tables using the tabled crate.
///
/// Scalar fields of the response render as one Field/Value table; each
/// array-of-objects field (allocations, yearly projections, contribution
/// schedules) renders as its own titled table below it.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            let scalars: Vec<(&str, &Value)> = map
                .iter()
                .filter(|(_, v)| !matches!(v, Value::Array(_) | Value::Object(_)))
                .map(|(k, v)| (k.as_str(), v))
                .collect();
            if !scalars.is_empty() {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (key, val) in &scalars {
                    builder.push_record([*key, &format_value(val)]);
                }
                println!("{}", Table::from(builder));
            }

            for (key, val) in map {
                match val {
                    Value::Array(arr) => {
                        println!("\n{}:", key);
                        print_array_table(arr);
                    }
                    Value::Object(_) => {
                        println!("\n{}:", key);
                        print_table(val);
                    }
                    _ => {}
                }
            }
        }
        Value::Array(arr) => print_array_table(arr),
        _ => println!("{}", value),
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Column headers come from the first row
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }
        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}
