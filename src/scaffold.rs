//! File creation
//!
//! The last step of the flow: validate the requested name, render the
//! template, and write the new file. Writes go through a temp file and an
//! atomic rename so an aborted creation never leaves a partial file at the
//! destination, and existing files are never overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::info;

use crate::fs_utils::atomic_rename;
use crate::projects::SOURCE_EXTENSION;
use crate::templates::{render, Template};
use crate::{Result, ScafforaError};

static VALID_FILENAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("invalid filename regex"));

/// Report of a successful scaffold, also used for `--format json` output.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedFile {
    /// Absolute path of the new file.
    pub path: PathBuf,
    /// Namespace written into the file, if any.
    pub namespace: Option<String>,
    /// Label of the template that was rendered.
    pub template: String,
}

/// Check a user-supplied file name (without extension).
///
/// Only letters, digits and underscores are allowed; the `.cs` extension is
/// appended by scaffora, never typed by the user.
pub fn validate_filename(name: &str) -> Result<()> {
    if VALID_FILENAME.is_match(name) {
        Ok(())
    } else {
        Err(ScafforaError::InvalidFileName {
            name: name.to_string(),
        })
    }
}

/// The full path a scaffolded file would be created at.
pub fn target_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, SOURCE_EXTENSION))
}

/// Render `template` and create `<dir>/<name>.cs`.
///
/// Fails without touching the filesystem if the name is invalid or the
/// target already exists. The content is written to a temp file next to the
/// destination and moved into place atomically.
pub fn scaffold_file(
    dir: &Path,
    name: &str,
    template: &Template,
    namespace: Option<&str>,
) -> Result<CreatedFile> {
    validate_filename(name)?;

    let path = target_path(dir, name);
    if path.exists() {
        return Err(ScafforaError::FileExists {
            path: path.display().to_string(),
        });
    }

    let content = render(&template.content, name, namespace);

    let tmp = dir.join(format!(".{}.{}.tmp", name, SOURCE_EXTENSION));
    fs::write(&tmp, &content).map_err(|e| ScafforaError::IoError {
        path: tmp.clone(),
        message: e.to_string(),
    })?;

    if let Err(e) = atomic_rename(&tmp, &path) {
        let _ = fs::remove_file(&tmp);
        return Err(ScafforaError::IoError {
            path: path.clone(),
            message: e.to_string(),
        });
    }

    info!("created {}", path.display());

    Ok(CreatedFile {
        path,
        namespace: namespace.map(|ns| ns.to_string()),
        template: template.label.clone(),
    })
}
