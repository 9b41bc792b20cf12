//! Namespace inference for scaffolded files
//!
//! Three cooperating pieces:
//! - plain-text scanners that pull an explicit `<RootNamespace>` out of a
//!   project file or a `namespace` declaration out of a neighboring source
//!   file, ignoring anything inside comments,
//! - a per-segment sanitizer,
//! - a composer that joins the base identifier with the directory levels
//!   between the project directory and the target directory.
//!
//! The scanners are regex scans, not parsers. They do not track string
//! literals, so a comment marker embedded in a C# string can mis-trigger
//! the stripping. That limitation is accepted; building a real C# / MSBuild
//! parser is out of scope.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::paths::relative_segments;
use crate::{Result, ScafforaError};

/// The delimiter joining namespace segments.
pub const NAMESPACE_DELIMITER: char = '.';

static XML_BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("invalid XML comment regex"));

static ROOT_NAMESPACE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<RootNamespace>\s*([^<]+?)\s*</RootNamespace>")
        .expect("invalid RootNamespace regex")
});

static CS_BLOCK_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("invalid block comment regex"));

static CS_LINE_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"//[^\n]*").expect("invalid line comment regex"));

static NAMESPACE_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bnamespace\s+([A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)")
        .expect("invalid namespace declaration regex")
});

/// Extract the `<RootNamespace>` value from project-file contents.
///
/// XML block comments are stripped first, so a commented-out override is not
/// picked up. The value is returned verbatim (it may contain dots).
pub fn root_namespace_from_project(content: &str) -> Option<String> {
    let stripped = XML_BLOCK_COMMENT.replace_all(content, "");

    ROOT_NAMESPACE_TAG
        .captures(&stripped)
        .map(|caps| caps[1].to_string())
}

/// Extract the declared namespace from C# source contents.
///
/// Block comments are stripped first, then line comments; this order keeps a
/// `//` that appears inside `/* ... */` from eating the rest of its line
/// after the block is removed. Both block-scoped (`namespace Foo {`) and
/// file-scoped (`namespace Foo;`) declarations match.
pub fn namespace_from_source(content: &str) -> Option<String> {
    let without_blocks = CS_BLOCK_COMMENT.replace_all(content, "");
    let stripped = CS_LINE_COMMENT.replace_all(&without_blocks, "");

    NAMESPACE_DECLARATION
        .captures(&stripped)
        .map(|caps| caps[1].to_string())
}

/// Read a project file and extract its `<RootNamespace>` value.
///
/// A missing tag is `Ok(None)`; an unreadable file is an error, the
/// environment is broken and the caller should hear about it.
pub fn root_namespace_from_project_file(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path).map_err(|e| ScafforaError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(root_namespace_from_project(&content))
}

/// Read a C# source file and extract its declared namespace.
pub fn namespace_from_source_file(path: &Path) -> Result<Option<String>> {
    let content = fs::read_to_string(path).map_err(|e| ScafforaError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(namespace_from_source(&content))
}

/// Remove every character that is not an ASCII letter, an ASCII digit, or the
/// namespace delimiter.
///
/// Applied to the project-derived name and to each directory segment
/// individually, never to a joined identifier. Dots already present inside a
/// single raw segment survive; path separators are the only segment boundary.
/// Idempotent: sanitizing a sanitized segment is a no-op.
pub fn sanitize_segment(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == NAMESPACE_DELIMITER)
        .collect()
}

/// Compose the namespace for a file created in `target_dir` under a project
/// rooted at `project_dir`.
///
/// `base` is the already-chosen base identifier (an explicit root namespace
/// or the sanitized project name). With `include_subdirs`, one sanitized
/// segment per directory level between `project_dir` and `target_dir` is
/// appended root-to-leaf. A target directory equal to the project directory,
/// or outside it, appends nothing.
///
/// An empty base means the namespace cannot be determined; callers treat
/// this as a recoverable condition and abort the creation.
pub fn compose_namespace(
    base: &str,
    project_dir: &Path,
    target_dir: &Path,
    include_subdirs: bool,
) -> Result<String> {
    if base.is_empty() {
        return Err(ScafforaError::NamespaceUnresolved {
            path: target_dir.display().to_string(),
        });
    }

    if !include_subdirs {
        return Ok(base.to_string());
    }

    let mut parts = vec![base.to_string()];

    if let Some(segments) = relative_segments(project_dir, target_dir) {
        for segment in segments {
            let sanitized = sanitize_segment(&segment);
            if !sanitized.is_empty() {
                parts.push(sanitized);
            }
        }
    }

    Ok(parts.join(&NAMESPACE_DELIMITER.to_string()))
}
