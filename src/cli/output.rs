//! CLI output formatting

use crate::core::ConfigMapping;
use console::Emoji;
use serde_json::Value;
use std::path::PathBuf;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "+ ");

/// Render a single config value
///
/// Strings print bare so the output can be used in shell substitutions;
/// everything else prints as JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        Value::Bool(_) | Value::Number(_) => value.to_string(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
    }
}

/// One line per top-level key with a short description of its value
pub fn format_mapping_summary(mapping: &ConfigMapping) -> String {
    mapping
        .iter()
        .map(|(key, value)| format!("  {}: {}", style(key).cyan(), describe(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(value: &Value) -> String {
    match value {
        Value::Array(items) => style(format!("[{} items]", items.len())).dim().to_string(),
        Value::Object(map) => style(format!("{{{} keys}}", map.len())).dim().to_string(),
        scalar => format_value(scalar),
    }
}

/// Report for `mkdirs`
pub fn format_created(created: &[PathBuf], requested: usize) -> String {
    if created.is_empty() {
        return format!("{} All {} directories already exist", INFO, requested);
    }

    let mut lines = vec![format!(
        "{} Created {} of {} directories",
        CHECK,
        style(created.len()).green(),
        requested
    )];
    for path in created {
        lines.push(format!("  {}{}", FOLDER, style(path.display()).bold()));
    }
    lines.join("\n")
}
