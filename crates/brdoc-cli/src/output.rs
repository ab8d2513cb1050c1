//! Output formatting utilities.

use serde_json::Value;

/// Formats a value as pretty JSON.
pub fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Formats one verdict row.
pub fn format_table_row(input: &str, canonical: &str, verdict: &str) -> String {
    format!("{:<24} {:<16} {}", truncate(input, 24), canonical, verdict)
}

/// Prints table header.
#[allow(clippy::print_literal)]
pub fn print_table_header() {
    println!("{:<24} {:<16} {}", "INPUT", "CANONICAL", "VERDICT");
    println!("{}", "-".repeat(50));
}

/// Prints `key: value` lines for a JSON object.
pub fn print_fields(value: &Value) {
    if let Value::Object(map) = value {
        for (key, field) in map {
            match field {
                Value::String(s) => println!("{:<14} {}", format!("{}:", key), s),
                other => println!("{:<14} {}", format!("{}:", key), other),
            }
        }
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
