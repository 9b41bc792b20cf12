//! scaffora: template-driven C# file scaffolding with namespace inference
//!
//! Given a workspace, scaffora discovers `.csproj` project files, determines
//! which project a new file belongs to (nearest enclosing project directory
//! wins), infers the namespace the file should declare, renders a template
//! and writes the file.
//!
//! Namespace inference precedence:
//! 1. a neighboring source file in the destination directory that already
//!    declares a namespace (reused verbatim),
//! 2. a `<RootNamespace>` override in the project file,
//! 3. the sanitized project name, with one segment appended per directory
//!    level below the project directory.
//!
//! # Example
//!
//! ```ignore
//! use scaffora::projects::{find_project_files, nearest_project_file, resolve_namespace};
//! use scaffora::projects::NamespaceOptions;
//! use std::path::Path;
//!
//! let projects = find_project_files(Path::new("/work/shop"), &[]);
//! let target = Path::new("/work/shop/Models/Customer.cs");
//!
//! if let Some(project) = nearest_project_file(&projects, target) {
//!     let namespace = resolve_namespace(
//!         project,
//!         target.parent().unwrap(),
//!         NamespaceOptions::default(),
//!     )?;
//!     println!("{}", namespace);
//! }
//! # Ok::<(), scaffora::ScafforaError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fs_utils;
pub mod namespace;
pub mod paths;
pub mod projects;
pub mod scaffold;
pub mod templates;
pub mod wizard;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use config::ScafforaConfig;
pub use error::{Result, ScafforaError};
pub use namespace::{
    compose_namespace, namespace_from_source, namespace_from_source_file,
    root_namespace_from_project, root_namespace_from_project_file, sanitize_segment,
};
pub use projects::{
    find_project_files, nearest_project_file, NamespaceOptions, ProjectFile, resolve_namespace,
};
pub use scaffold::{scaffold_file, CreatedFile};
pub use templates::{available_templates, find_template, render, Template};
