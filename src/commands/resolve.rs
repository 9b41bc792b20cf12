//! Resolve command implementation
//!
//! Dry-run of the inference: shows which project would own a file created at
//! the given path and what namespace it would be given. "No owning project"
//! is an answer here, not an error.

use serde_json::json;

use crate::cli::{OutputFormat, ResolveArgs};
use crate::config::ScafforaConfig;
use crate::error::{Result, ScafforaError};
use crate::fs_utils::canonicalize_path;
use crate::paths::resolve_path;
use crate::projects::{
    find_project_files, nearest_project_file, NamespaceOptions, resolve_namespace,
};

use super::CommandContext;

/// Run the resolve command
pub fn run_resolve(ctx: &CommandContext, args: &ResolveArgs) -> Result<String> {
    let config = ScafforaConfig::load()?;
    let root = canonicalize_path(&resolve_path(args.root.as_deref())?);

    // The file may not exist yet; canonicalize the nearest existing ancestor
    // so the prefix comparison sees the same shape as discovery does.
    let target = {
        let raw = resolve_path(Some(&args.path))?;
        if raw.exists() {
            canonicalize_path(&raw)
        } else {
            match (raw.parent(), raw.file_name()) {
                (Some(parent), Some(name)) if parent.exists() => {
                    canonicalize_path(parent).join(name)
                }
                _ => raw,
            }
        }
    };

    // An existing directory means "a file somewhere in here".
    let target_dir = if target.is_dir() {
        target.clone()
    } else {
        target
            .parent()
            .map(|p| p.to_path_buf())
            .ok_or_else(|| ScafforaError::FileNotFound {
                path: target.display().to_string(),
            })?
    };

    let projects = find_project_files(&root, &config.discovery.excluded_dirs);
    let project = nearest_project_file(&projects, &target);

    let Some(project) = project else {
        return match ctx.format {
            OutputFormat::Json => {
                let report = json!({ "path": target, "project": null, "namespace": null });
                serde_json::to_string_pretty(&report).map_err(|e| ScafforaError::ConfigError {
                    message: format!("JSON serialization failed: {}", e),
                })
            }
            OutputFormat::Text => Ok(format!("No project owns {}", target.display())),
        };
    };

    let options = NamespaceOptions {
        use_neighbors: config.namespace.use_neighbors,
        include_subdirs: config.namespace.include_subdirectories,
    };
    let namespace = resolve_namespace(project, &target_dir, options)?;

    match ctx.format {
        OutputFormat::Json => {
            let report = json!({
                "path": target,
                "project": project.path(),
                "namespace": namespace,
            });
            serde_json::to_string_pretty(&report).map_err(|e| ScafforaError::ConfigError {
                message: format!("JSON serialization failed: {}", e),
            })
        }
        OutputFormat::Text => Ok(format!(
            "project:   {}\nnamespace: {}",
            project.path().display(),
            namespace
        )),
    }
}
