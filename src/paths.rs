//! Path utilities shared by the resolver and the namespace composer
//!
//! The nearest-project resolver and the namespace composer both reason about
//! "is this directory an ancestor of that path" and "which directory levels
//! lie between the two". Both questions must be answered component-wise:
//! `/src/dir` is not an ancestor of `/src/dir2` even though they share a long
//! string prefix.

use std::path::{Path, PathBuf};

use crate::{Result, ScafforaError};

/// Resolve path, defaulting to current working directory if None.
///
/// This is the primary entry point for path resolution. Use this when
/// accepting an optional path from CLI arguments.
pub fn resolve_path(path: Option<&Path>) -> Result<PathBuf> {
    match path {
        Some(p) => {
            if p.is_absolute() {
                Ok(p.to_path_buf())
            } else {
                let cwd = std::env::current_dir().map_err(|e| ScafforaError::FileNotFound {
                    path: format!("current directory: {}", e),
                })?;
                Ok(cwd.join(p))
            }
        }
        None => std::env::current_dir().map_err(|e| ScafforaError::FileNotFound {
            path: format!("current directory: {}", e),
        }),
    }
}

/// Check whether `dir` is a genuine leading-path-segment prefix of `path`.
///
/// Equality counts: a path is a prefix of itself. The comparison is done on
/// whole components, never on substrings, so `/src/dir` is not a prefix of
/// `/src/dir2/file.cs`.
pub fn is_path_prefix(dir: &Path, path: &Path) -> bool {
    path.strip_prefix(dir).is_ok()
}

/// The portion of `path` that remains after removing the `dir` prefix,
/// or None if `dir` is not a genuine path prefix of `path`.
pub fn strip_path_prefix<'a>(dir: &Path, path: &'a Path) -> Option<&'a Path> {
    path.strip_prefix(dir).ok()
}

/// Decompose the part of `path` below `base` into its directory segments,
/// root-to-leaf, empty segments dropped.
///
/// Returns None when `path` is not a descendant of (or equal to) `base`.
/// Equal paths yield an empty segment list.
pub fn relative_segments(base: &Path, path: &Path) -> Option<Vec<String>> {
    let rest = path.strip_prefix(base).ok()?;
    Some(
        rest.components()
            .map(|c| c.as_os_str().to_string_lossy().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
    )
}

/// Length, in characters, of a path rendered as a string.
///
/// The nearest-project resolver compares candidates by the length of the
/// target suffix left over after removing the candidate's directory; this is
/// the shared measuring stick.
pub fn path_len(path: &Path) -> usize {
    path.to_string_lossy().chars().count()
}
