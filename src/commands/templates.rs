//! Templates command implementation

use serde_json::json;

use crate::cli::{OutputFormat, TemplatesArgs};
use crate::config::ScafforaConfig;
use crate::error::{Result, ScafforaError};
use crate::templates::available_templates;

use super::CommandContext;

/// Run the templates command
pub fn run_templates(ctx: &CommandContext, _args: &TemplatesArgs) -> Result<String> {
    let config = ScafforaConfig::load()?;
    let templates = available_templates(config.templates.dir.as_deref())?;

    match ctx.format {
        OutputFormat::Json => {
            let entries: Vec<_> = templates
                .iter()
                .map(|t| json!({ "label": t.label, "builtin": t.builtin }))
                .collect();
            serde_json::to_string_pretty(&entries).map_err(|e| ScafforaError::ConfigError {
                message: format!("JSON serialization failed: {}", e),
            })
        }
        OutputFormat::Text => {
            let mut output = String::new();
            for template in &templates {
                let origin = if template.builtin { "built-in" } else { "user" };
                output.push_str(&format!("{}  ({})\n", template.label, origin));
            }
            Ok(output)
        }
    }
}
