//! New command implementation
//!
//! Orchestrates the scaffold flow: discover projects, resolve or prompt for
//! the owning project and destination directory, pick a template, name the
//! file, infer the namespace, write. Every prompt can be skipped by a flag,
//! so `scaffora new src/Models -t Class -n Customer` is fully
//! non-interactive.

use std::path::Path;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use crate::cli::{NewArgs, OutputFormat};
use crate::config::ScafforaConfig;
use crate::error::{Result, ScafforaError};
use crate::fs_utils::canonicalize_path;
use crate::paths::resolve_path;
use crate::projects::{
    find_project_files, nearest_project_file, NamespaceOptions, ProjectFile, resolve_namespace,
};
use crate::scaffold::scaffold_file;
use crate::templates::{available_templates, find_template};
use crate::wizard::ScaffoldWizard;

use super::CommandContext;

/// Run the new command
pub fn run_new(ctx: &CommandContext, args: &NewArgs) -> Result<String> {
    let config = ScafforaConfig::load()?;
    let wizard = ScaffoldWizard::new(&config);

    let root = canonicalize_path(&resolve_path(args.root.as_deref())?);
    if !root.is_dir() {
        return Err(ScafforaError::FileNotFound {
            path: root.display().to_string(),
        });
    }

    // A directory seed fixes the destination outright; a file seed only
    // steers project resolution and the directory picker.
    let seed = match args.path.as_deref() {
        Some(path) => Some(canonicalize_path(&resolve_path(Some(path))?)),
        None => None,
    };
    let seed_is_dir = seed.as_deref().map_or(false, Path::is_dir);

    let projects = discover_projects(ctx, &config, &root);
    if projects.is_empty() {
        return Err(ScafforaError::NoProjects {
            root: root.display().to_string(),
        });
    }
    debug!("found {} project file(s) under {}", projects.len(), root.display());

    let project = select_project(&wizard, &projects, seed.as_deref(), &root)?;

    let target_dir = match (&seed, seed_is_dir) {
        (Some(dir), true) => dir.clone(),
        _ => wizard.select_directory(project, seed.as_deref())?,
    };

    let templates = available_templates(config.templates.dir.as_deref())?;
    let template = match args.template.as_deref() {
        Some(label) => {
            find_template(&templates, label).ok_or_else(|| ScafforaError::TemplateNotFound {
                name: label.to_string(),
            })?
        }
        None => wizard.select_template(&templates)?,
    };

    let name = match args.name.as_deref() {
        Some(name) => name.to_string(),
        None => wizard.input_filename(&target_dir)?,
    };

    let namespace = if config.namespace.include && !args.no_namespace {
        let options = NamespaceOptions {
            use_neighbors: config.namespace.use_neighbors,
            include_subdirs: config.namespace.include_subdirectories && !args.flat_namespace,
        };
        Some(resolve_namespace(project, &target_dir, options)?)
    } else {
        None
    };

    let created = scaffold_file(&target_dir, &name, template, namespace.as_deref())?;

    match ctx.format {
        OutputFormat::Json => serde_json::to_string_pretty(&created).map_err(|e| {
            ScafforaError::ConfigError {
                message: format!("JSON serialization failed: {}", e),
            }
        }),
        OutputFormat::Text => Ok(format!("Created {}", created.path.display())),
    }
}

/// Discover project files, with a spinner on interactive terminals.
fn discover_projects(
    ctx: &CommandContext,
    config: &ScafforaConfig,
    root: &Path,
) -> Vec<ProjectFile> {
    let spinner = if console::Term::stderr().is_term() && !ctx.verbose {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Scanning {} for projects...", root.display()));
        pb.enable_steady_tick(Duration::from_millis(80));
        Some(pb)
    } else {
        None
    };

    let projects = find_project_files(root, &config.discovery.excluded_dirs);

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    projects
}

/// The nearest project when a seed pins one down, otherwise a prompt.
fn select_project<'p>(
    wizard: &ScaffoldWizard<'_>,
    projects: &'p [ProjectFile],
    seed: Option<&Path>,
    root: &Path,
) -> Result<&'p ProjectFile> {
    if let Some(seed) = seed {
        if let Some(project) = nearest_project_file(projects, seed) {
            debug!(
                "resolved {} as the owning project of {}",
                project.path().display(),
                seed.display()
            );
            return Ok(project);
        }
        warn!("no project contains {}", seed.display());
    }

    wizard.select_project(projects, root)
}
