//! Project-file discovery and nearest-project resolution
//!
//! A "project" is a `.csproj` file; the directory containing it owns every
//! file beneath that directory unless a more deeply nested project claims it
//! first. Resolution never fails: a target no project contains simply
//! resolves to `None` and the caller decides what to do (usually prompt).

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::debug;

use crate::namespace::{
    compose_namespace, namespace_from_source, root_namespace_from_project_file, sanitize_segment,
};
use crate::paths::{path_len, strip_path_prefix};
use crate::Result;

/// Extension of project-definition files, without the dot.
pub const PROJECT_EXTENSION: &str = "csproj";

/// Extension of C# source files, without the dot.
pub const SOURCE_EXTENSION: &str = "cs";

/// One discovered project-definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    path: PathBuf,
}

impl ProjectFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Location of the `.csproj` file itself.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Project name: the file's base name with the extension stripped.
    pub fn name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }

    /// The directory containing the project file.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new(""))
    }
}

/// Discover all project files under `root`.
///
/// Respects gitignore, does not follow symlinks, skips hidden entries and
/// the configured excluded directories. The result is sorted by path so
/// downstream tie-breaks are deterministic. May be empty.
pub fn find_project_files(root: &Path, excluded_dirs: &[String]) -> Vec<ProjectFile> {
    let mut builder = WalkBuilder::new(root);

    builder.git_ignore(true);
    builder.git_global(true);
    builder.git_exclude(true);
    builder.follow_links(false);
    builder.hidden(true);

    let excluded: Vec<String> = excluded_dirs.to_vec();
    builder.filter_entry(move |entry| {
        let is_dir = entry.file_type().map_or(false, |t| t.is_dir());
        if !is_dir {
            return true;
        }
        let name = entry.file_name().to_string_lossy();
        !excluded.iter().any(|e| e.as_str() == name)
    });

    let mut found = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("skipping unreadable entry during discovery: {}", e);
                continue;
            }
        };

        if !entry.file_type().map_or(false, |t| t.is_file()) {
            continue;
        }

        let path = entry.into_path();
        if path.extension().and_then(|e| e.to_str()) == Some(PROJECT_EXTENSION) {
            found.push(ProjectFile::new(path));
        }
    }

    found.sort_by(|a, b| a.path.cmp(&b.path));
    found
}

/// Find the project whose directory most closely contains `target`.
///
/// For each candidate, the candidate's directory is removed from the target
/// path as a genuine leading-path-segment prefix; the candidate leaving the
/// shortest suffix wins. Candidates whose directory is not a path prefix of
/// the target never match (they count as the full target length). A strictly
/// shorter suffix replaces the current best; ties keep the first candidate
/// in iteration order. Returns `None` when no candidate contains the target.
pub fn nearest_project_file<'a>(
    candidates: &'a [ProjectFile],
    target: &Path,
) -> Option<&'a ProjectFile> {
    let mut nearest: Option<&ProjectFile> = None;
    let mut nearest_suffix_len = path_len(target);

    for candidate in candidates {
        let Some(suffix) = strip_path_prefix(candidate.dir(), target) else {
            continue;
        };

        let suffix_len = path_len(suffix);
        if suffix_len < nearest_suffix_len {
            nearest = Some(candidate);
            nearest_suffix_len = suffix_len;
        }
    }

    nearest
}

/// Knobs for namespace resolution, mirroring the user-facing settings.
#[derive(Debug, Clone, Copy)]
pub struct NamespaceOptions {
    /// Reuse the namespace of a source file already in the target directory.
    pub use_neighbors: bool,
    /// Append one segment per directory level below the project directory.
    pub include_subdirs: bool,
}

impl Default for NamespaceOptions {
    fn default() -> Self {
        Self {
            use_neighbors: true,
            include_subdirs: true,
        }
    }
}

/// Resolve the namespace a file created in `target_dir` should declare.
///
/// Precedence:
/// 1. a neighboring `.cs` file in `target_dir` whose namespace parses:
///    reused verbatim, it already came from real source;
/// 2. the project's `<RootNamespace>` override, then the sanitized project
///    name, as the base for [`compose_namespace`].
///
/// An unreadable project file is an environment fault and surfaces as an IO
/// error. Unreadable neighbors are merely skipped; neighbor reuse is an
/// opportunistic shortcut, not a requirement.
pub fn resolve_namespace(
    project: &ProjectFile,
    target_dir: &Path,
    options: NamespaceOptions,
) -> Result<String> {
    if options.use_neighbors {
        if let Some(namespace) = namespace_from_neighbors(target_dir) {
            debug!(
                "reusing namespace '{}' from a neighboring file in {}",
                namespace,
                target_dir.display()
            );
            return Ok(namespace);
        }
    }

    let base = match root_namespace_from_project_file(project.path())? {
        Some(root) => {
            debug!("using <RootNamespace> override '{}'", root);
            root
        }
        None => sanitize_segment(&project.name()),
    };

    compose_namespace(&base, project.dir(), target_dir, options.include_subdirs)
}

/// First parseable namespace among the `.cs` files in `dir`, scanned in
/// sorted order so the pick is deterministic.
fn namespace_from_neighbors(dir: &Path) -> Option<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("cannot list {} for neighbors: {}", dir.display(), e);
            return None;
        }
    };

    let mut sources: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(SOURCE_EXTENSION)
        })
        .collect();
    sources.sort();

    for path in sources {
        match fs::read_to_string(&path) {
            Ok(content) => {
                if let Some(namespace) = namespace_from_source(&content) {
                    return Some(namespace);
                }
            }
            Err(e) => {
                debug!("skipping unreadable neighbor {}: {}", path.display(), e);
            }
        }
    }

    None
}
