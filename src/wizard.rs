//! Interactive prompt sequence for the `new` command.
//!
//! Four steps: project, destination directory, template, file name. Any
//! cancelled prompt aborts the whole flow before anything is written, so a
//! dismissed wizard has no side effects.

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::config::ScafforaConfig;
use crate::projects::ProjectFile;
use crate::scaffold::{target_path, validate_filename};
use crate::templates::{natural_cmp, Template};
use crate::{Result, ScafforaError};

const PROJECT_ROOT_LABEL: &str = "project root";
const SEED_DIRECTORY_LABEL: &str = "directory of the given file";

/// Interactive scaffold wizard
pub struct ScaffoldWizard<'a> {
    config: &'a ScafforaConfig,
    theme: ColorfulTheme,
}

/// One row of the destination-directory picker.
struct DirectoryItem {
    path: PathBuf,
    label: String,
    description: Option<String>,
    detail: Option<&'static str>,
}

impl<'a> ScaffoldWizard<'a> {
    pub fn new(config: &'a ScafforaConfig) -> Self {
        Self {
            config,
            theme: ColorfulTheme::default(),
        }
    }

    /// Pick the owning project when resolution could not decide.
    pub fn select_project<'p>(
        &self,
        projects: &'p [ProjectFile],
        root: &Path,
    ) -> Result<&'p ProjectFile> {
        let mut indices: Vec<usize> = (0..projects.len()).collect();
        indices.sort_by(|&a, &b| natural_cmp(&projects[a].name(), &projects[b].name()));

        let items: Vec<String> = indices
            .iter()
            .map(|&i| {
                let project = &projects[i];
                let relative = project
                    .path()
                    .strip_prefix(root)
                    .unwrap_or_else(|_| project.path());
                format!(
                    "{}  {}",
                    project.name(),
                    style(relative.display()).dim()
                )
            })
            .collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Select a project")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|_| ScafforaError::Cancelled)?;

        Ok(&projects[indices[selection]])
    }

    /// Pick the destination directory under the project.
    ///
    /// The seed file's directory (when it lies inside the project) is listed
    /// first, then the project root, then every non-excluded subdirectory.
    /// Two directories sharing a name are disambiguated with their relative
    /// parent path. When the project has no subdirectories and no seed is
    /// present there is nothing to choose; the project root is returned
    /// without prompting.
    pub fn select_directory(&self, project: &ProjectFile, seed: Option<&Path>) -> Result<PathBuf> {
        let project_dir = project.dir();

        let mut directories = Vec::new();
        collect_directories(
            project_dir,
            &self.config.discovery.excluded_dirs,
            &mut directories,
        )?;

        let mut items: Vec<DirectoryItem> = Vec::new();

        if let Some(seed_file) = seed {
            if let Some(seed_dir) = seed_file.parent() {
                if seed_dir.starts_with(project_dir) {
                    items.push(DirectoryItem {
                        path: seed_dir.to_path_buf(),
                        label: directory_label(seed_dir),
                        description: None,
                        detail: Some(SEED_DIRECTORY_LABEL),
                    });
                    directories.retain(|d| d != seed_dir);
                }
            }
        }

        items.push(DirectoryItem {
            path: project_dir.to_path_buf(),
            label: directory_label(project_dir),
            description: None,
            detail: Some(PROJECT_ROOT_LABEL),
        });

        for directory in directories {
            if directory == project_dir {
                continue;
            }
            let mut item = DirectoryItem {
                label: directory_label(&directory),
                description: None,
                detail: None,
                path: directory,
            };

            if let Some(pos) = items.iter().position(|i| i.label == item.label) {
                if items[pos].description.is_none() {
                    items[pos].description = relative_parent(project_dir, &items[pos].path);
                }
                item.description = relative_parent(project_dir, &item.path);
            }
            items.push(item);
        }

        if items.len() <= 1 && seed.is_none() {
            return Ok(project_dir.to_path_buf());
        }

        let rendered: Vec<String> = items.iter().map(render_directory_item).collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Select a destination directory")
            .items(&rendered)
            .default(0)
            .interact()
            .map_err(|_| ScafforaError::Cancelled)?;

        Ok(items[selection].path.clone())
    }

    /// Pick a template.
    pub fn select_template<'t>(&self, templates: &'t [Template]) -> Result<&'t Template> {
        let items: Vec<&str> = templates.iter().map(|t| t.label.as_str()).collect();

        let selection = Select::with_theme(&self.theme)
            .with_prompt("Select a template")
            .items(&items)
            .default(0)
            .interact()
            .map_err(|_| ScafforaError::Cancelled)?;

        Ok(&templates[selection])
    }

    /// Ask for the new file's name, re-prompting on invalid or taken names.
    pub fn input_filename(&self, dir: &Path) -> Result<String> {
        let dir = dir.to_path_buf();

        Input::<String>::with_theme(&self.theme)
            .with_prompt("File name (without extension)")
            .validate_with(move |input: &String| -> std::result::Result<(), String> {
                if validate_filename(input).is_err() {
                    return Err("Name contains invalid characters".to_string());
                }
                if target_path(&dir, input).exists() {
                    return Err("File already exists".to_string());
                }
                Ok(())
            })
            .interact_text()
            .map_err(|_| ScafforaError::Cancelled)
    }
}

/// Recursively list subdirectories, skipping excluded names.
fn collect_directories(dir: &Path, excluded: &[String], acc: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| ScafforaError::IoError {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut children: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            !excluded.iter().any(|e| e == &name)
        })
        .collect();
    children.sort();

    for child in children {
        acc.push(child.clone());
        collect_directories(&child, excluded, acc)?;
    }

    Ok(())
}

fn directory_label(dir: &Path) -> String {
    dir.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| dir.display().to_string())
}

/// The relative path of the item's parent, used to tell same-named
/// directories apart.
fn relative_parent(project_dir: &Path, dir: &Path) -> Option<String> {
    let relative = dir.strip_prefix(project_dir).ok()?;
    let parent = relative.parent()?;
    if parent.as_os_str().is_empty() {
        Some(".".to_string())
    } else {
        Some(parent.display().to_string())
    }
}

fn render_directory_item(item: &DirectoryItem) -> String {
    let mut rendered = item.label.clone();
    if let Some(description) = &item.description {
        rendered.push_str(&format!("  {}", style(description).dim()));
    }
    if let Some(detail) = item.detail {
        rendered.push_str(&format!("  {}", style(format!("({})", detail)).dim()));
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_collect_directories_skips_excluded() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("Models/Nested")).unwrap();
        fs::create_dir_all(temp.path().join("bin/Debug")).unwrap();
        fs::create_dir_all(temp.path().join("obj")).unwrap();

        let excluded = vec!["bin".to_string(), "obj".to_string()];
        let mut found = Vec::new();
        collect_directories(temp.path(), &excluded, &mut found).unwrap();

        assert_eq!(
            found,
            vec![
                temp.path().join("Models"),
                temp.path().join("Models/Nested"),
            ]
        );
    }

    #[test]
    fn test_relative_parent_for_nested_dir() {
        let project_dir = Path::new("/src/app");
        assert_eq!(
            relative_parent(project_dir, Path::new("/src/app/Data/Models")),
            Some("Data".to_string())
        );
        assert_eq!(
            relative_parent(project_dir, Path::new("/src/app/Data")),
            Some(".".to_string())
        );
    }
}
