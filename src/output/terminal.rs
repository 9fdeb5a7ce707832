//! Terminal rendering of function results.

use colored::Colorize;
use itertools::Itertools;
use serde_json::Value;
use std::error::Error;

/// Render a result as JSON text, booleans coloured.
///
/// # Arguments
/// * `value` - Result of a text function
///
/// # Returns
/// A single line for scalars, indented JSON for lists
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Bool(true) => "true".green().to_string(),
        Value::Bool(false) => "false".red().to_string(),
        Value::Array(items) if !items.is_empty() => format!(
            "[\n{}\n]",
            items.iter().map(|item| format!("  {item}")).join(",\n")
        ),
        other => other.to_string(),
    }
}

/// Render an error for stderr.
pub fn format_error(function: &str, err: &dyn Error) -> String {
    format!("{} {}: {err}", "Error".on_red(), function.bold())
}

/// Usage text listing every function and its arguments.
pub fn format_usage(program: &str, functions: &[(&str, &str)]) -> String {
    let width = functions
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0);
    let lines = functions
        .iter()
        .map(|(name, args)| format!("  {:<width$} {args}", name.cyan()))
        .join("\n");
    format!("Usage: {program} <function> [args...]\n\nFunctions:\n{lines}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_format_value_scalars() {
        plain();
        assert_eq!(format_value(&json!("10.0.0.0/8")), "\"10.0.0.0/8\"");
        assert_eq!(format_value(&json!(24)), "24");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(false)), "false");
    }

    #[test]
    fn test_format_value_list() {
        plain();
        assert_eq!(
            format_value(&json!(["10.0.0.0/23", "2001:db8::/63"])),
            "[\n  \"10.0.0.0/23\",\n  \"2001:db8::/63\"\n]"
        );
        assert_eq!(format_value(&json!([])), "[]");
    }

    #[test]
    fn test_format_error() {
        plain();
        let err: Box<dyn Error> = "Invalid address: bad".into();
        assert_eq!(format_error("ptr", err.as_ref()), "Error ptr: Invalid address: bad");
    }

    #[test]
    fn test_format_usage() {
        plain();
        let usage = format_usage(
            "ipnetwork",
            &[("ptr", "<address>"), ("summarize", "<prefix>...")],
        );
        assert_eq!(
            usage,
            "Usage: ipnetwork <function> [args...]\n\nFunctions:\n  ptr       <address>\n  summarize <prefix>..."
        );
    }
}
