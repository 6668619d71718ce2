//! Rendering of projected values

use crate::error::{CliError, CliResult};
use crate::exit_codes::EXIT_ERROR;
use nfw_config::OutputFormat;
use serde_json::Value;

/// Render a projected value for stdout
///
/// Bare strings print as-is so a single identifier can be piped into the next
/// command; everything else is rendered in the requested format.
pub fn render(value: &Value, format: OutputFormat) -> CliResult<String> {
    if let Value::String(text) = value {
        return Ok(text.clone());
    }
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::new("Failed to render JSON", EXIT_ERROR).with_source(e))?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)
            .map_err(|e| CliError::new("Failed to render YAML", EXIT_ERROR).with_source(e))?,
    };
    Ok(rendered.trim_end().to_string())
}
