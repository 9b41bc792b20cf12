//! Config command implementation

use crate::cli::{ConfigAction, ConfigArgs, OutputFormat};
use crate::config::ScafforaConfig;
use crate::error::{Result, ScafforaError};

use super::CommandContext;

/// Run the config command
pub fn run_config(ctx: &CommandContext, args: &ConfigArgs) -> Result<String> {
    match &args.action {
        ConfigAction::Show => {
            let config = ScafforaConfig::load()?;
            match ctx.format {
                OutputFormat::Json => serde_json::to_string_pretty(&config).map_err(|e| {
                    ScafforaError::ConfigError {
                        message: format!("JSON serialization failed: {}", e),
                    }
                }),
                OutputFormat::Text => Ok(config.display()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = ScafforaConfig::load()?;
            config.set(key, value)?;
            config.save()?;
            Ok(format!("Set {} = {}", key, value))
        }
        ConfigAction::Reset => {
            let mut config = ScafforaConfig::load()?;
            config.reset();
            config.save()?;
            Ok("Configuration reset to defaults".to_string())
        }
    }
}
