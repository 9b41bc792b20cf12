//! Projects command implementation

use serde_json::json;

use crate::cli::{OutputFormat, ProjectsArgs};
use crate::config::ScafforaConfig;
use crate::error::{Result, ScafforaError};
use crate::fs_utils::canonicalize_path;
use crate::paths::resolve_path;
use crate::projects::find_project_files;

use super::CommandContext;

/// Run the projects command
pub fn run_projects(ctx: &CommandContext, args: &ProjectsArgs) -> Result<String> {
    let config = ScafforaConfig::load()?;
    let root = canonicalize_path(&resolve_path(args.root.as_deref())?);

    if !root.is_dir() {
        return Err(ScafforaError::FileNotFound {
            path: root.display().to_string(),
        });
    }

    let projects = find_project_files(&root, &config.discovery.excluded_dirs);

    match ctx.format {
        OutputFormat::Json => {
            let entries: Vec<_> = projects
                .iter()
                .map(|p| {
                    json!({
                        "name": p.name(),
                        "path": p.path(),
                        "dir": p.dir(),
                    })
                })
                .collect();
            serde_json::to_string_pretty(&entries).map_err(|e| ScafforaError::ConfigError {
                message: format!("JSON serialization failed: {}", e),
            })
        }
        OutputFormat::Text => {
            if projects.is_empty() {
                return Ok(format!("No project files found under {}", root.display()));
            }
            let mut output = String::new();
            for project in &projects {
                output.push_str(&format!("{}  {}\n", project.name(), project.path().display()));
            }
            Ok(output)
        }
    }
}
