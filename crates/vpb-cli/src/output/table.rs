use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// A tax report renders as a company header, one field-by-quarter table, the
/// ordered annual breakdown, and the audit flags. Any other object falls
/// back to a flat field/value table.
pub fn print_table(value: &Value) {
    if value.get("overall").is_some() {
        print_report(value);
    } else {
        print_flat_object(value);
    }
}

fn print_report(value: &Value) {
    if let Some(info) = value.get("company_info") {
        let name = text(info.get("name"));
        let year = text(info.get("year"));
        if year.is_empty() {
            println!("Company: {}", name);
        } else {
            println!("Company: {} ({})", name, year);
        }
        println!();
    }

    if let Some(Value::Array(quarters)) = value.get("quarters") {
        print_quarter_table(quarters);
        println!();
    }

    if let Some(overall) = value.get("overall") {
        println!("Annual breakdown:");
        print_flat_object(overall);
    }

    if let Some(Value::Array(flags)) = value.get("audit_flags") {
        if !flags.is_empty() {
            println!("\nAudit flags:");
            for flag in flags {
                if let Value::String(s) = flag {
                    println!("  - {}", s);
                }
            }
        }
    }
}

/// One column per retained quarter, one row per breakdown field.
fn print_quarter_table(quarters: &[Value]) {
    let Some(Value::Object(first)) = quarters.first().and_then(|q| q.get("computation")) else {
        return;
    };

    let mut headers: Vec<String> = vec!["Field".to_string()];
    for entry in quarters {
        headers.push(text(entry.get("quarter")));
    }

    let mut builder = Builder::default();
    builder.push_record(&headers);

    for field in first.keys() {
        let mut row: Vec<String> = vec![field.clone()];
        for entry in quarters {
            let cell = entry
                .get("computation")
                .and_then(|c| c.get(field.as_str()))
                .map(format_value)
                .unwrap_or_default();
            row.push(cell);
        }
        builder.push_record(row);
    }

    let table = Table::from(builder);
    println!("{}", table);
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        let table = Table::from(builder);
        println!("{}", table);
    } else {
        println!("{}", value);
    }
}

fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
