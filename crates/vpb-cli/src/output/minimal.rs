use serde_json::Value;

/// Print just the key answer value from the output: the final annual tax
/// owed for a report, or the tax owed for a one-off schedule lookup.
pub fn print_minimal(value: &Value) {
    if let Some(final_tax) = value.get("overall").and_then(|o| o.get("final_tax_owed")) {
        println!("{}", format_minimal(final_tax));
        return;
    }

    if let Some(tax) = value.get("tax_owed") {
        println!("{}", format_minimal(tax));
        return;
    }

    // Fall back to the first field of an object
    if let Value::Object(map) = value {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(value));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
