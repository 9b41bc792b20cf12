//! TestRepo builder for integration testing
//!
//! Builds throwaway workspace structures (project files, source files,
//! directories) in a temp dir and hands out canonicalized paths so
//! comparisons against discovery results are stable across platforms.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Minimal SDK-style project file, no RootNamespace override.
pub const PLAIN_PROJECT: &str = r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
  </PropertyGroup>
</Project>
"#;

/// Builder for creating test workspace structures
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty test workspace
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Canonicalized workspace root
    pub fn path(&self) -> PathBuf {
        self.dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir")
    }

    /// Absolute path of an entry inside the workspace
    pub fn join(&self, relative_path: &str) -> PathBuf {
        self.path().join(relative_path)
    }

    /// Add a file with the given content
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Add a project file without a RootNamespace override
    pub fn add_project(&self, relative_path: &str) -> &Self {
        self.add_file(relative_path, PLAIN_PROJECT)
    }

    /// Add a project file carrying a RootNamespace override
    pub fn add_project_with_root_namespace(&self, relative_path: &str, root: &str) -> &Self {
        let content = format!(
            r#"<Project Sdk="Microsoft.NET.Sdk">
  <PropertyGroup>
    <TargetFramework>net8.0</TargetFramework>
    <RootNamespace>{}</RootNamespace>
  </PropertyGroup>
</Project>
"#,
            root
        );
        self.add_file(relative_path, &content)
    }

    /// Add an empty directory
    pub fn add_dir(&self, relative_path: &str) -> &Self {
        fs::create_dir_all(self.path().join(relative_path)).expect("Failed to create dir");
        self
    }
}

/// Paths of a project list, relative to `root`, for compact assertions.
pub fn relative_paths(projects: &[scaffora::ProjectFile], root: &Path) -> Vec<String> {
    projects
        .iter()
        .map(|p| {
            p.path()
                .strip_prefix(root)
                .expect("project outside root")
                .display()
                .to_string()
        })
        .collect()
}
