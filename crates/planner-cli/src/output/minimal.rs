use serde_json::Value;

use super::format_value;

/// Print just the key answer value from the output.
///
/// Heuristic: well-known headline fields first, then the 10-year horizon
/// or the contribution final value, then fall back to the first field.
pub fn print_minimal(value: &Value) {
    let map = match value {
        Value::Object(map) => map,
        _ => {
            println!("{}", format_value(value));
            return;
        }
    };

    // Headline scalar fields
    for key in ["finalValue", "futureValue", "totalValue"] {
        if let Some(val) = map.get(key) {
            if !val.is_null() {
                println!("{}", format_value(val));
                return;
            }
        }
    }

    // Contribution output nested in a plan response
    if let Some(Value::Object(monthly)) = map.get("monthlyContribution") {
        if let Some(val) = monthly.get("finalValue") {
            println!("{}", format_value(val));
            return;
        }
    }

    // Lump-sum plan: the 10-year projection is the headline number
    if let Some(Value::Object(horizons)) = map.get("expectedReturns") {
        if let Some(val) = horizons.get("10") {
            println!("{}", format_value(val));
            return;
        }
    }

    // Portfolio output: the furthest projected total value
    if let Some(Value::Array(projections)) = map.get("yearlyProjections") {
        if let Some(Value::Object(last)) = projections.last() {
            if let Some(val) = last.get("totalValue").or_else(|| last.get("value")) {
                println!("{}", format_value(val));
                return;
            }
        }
    }

    if let Some((key, val)) = map.iter().next() {
        println!("{}: {}", key, format_value(val));
        return;
    }

    println!("{}", value);
}
