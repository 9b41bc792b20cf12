//! Cross-platform filesystem utilities for Windows compatibility
//!
//! This module provides helpers that work correctly on both Unix and Windows:
//! - `normalize_path`: Strips Windows `\\?\` prefix from canonicalized paths
//! - `atomic_rename`: Handles atomic file replacement (Windows requires explicit delete)

use std::io;
use std::path::{Path, PathBuf};

/// Normalize Windows paths by removing the `\\?\` prefix if present.
///
/// On Windows, `Path::canonicalize()` returns paths with the extended-length
/// path prefix (`\\?\C:\...`), which breaks string comparisons against the
/// candidate project directories and confuses user-facing display. This
/// function strips the prefix on Windows while being a no-op on Unix.
pub fn normalize_path(path: &Path) -> PathBuf {
    #[cfg(windows)]
    {
        let s = path.to_string_lossy();
        // Handle UNC paths: \\?\UNC\server\share -> \\server\share
        if let Some(stripped) = s.strip_prefix(r"\\?\UNC\") {
            return PathBuf::from(format!(r"\\{}", stripped));
        }
        // Handle local paths: \\?\C:\path -> C:\path
        if let Some(stripped) = s.strip_prefix(r"\\?\") {
            return PathBuf::from(stripped);
        }
    }
    path.to_path_buf()
}

/// Canonicalize and normalize a path for consistent comparison.
///
/// If canonicalization fails (e.g., path doesn't exist), returns the original
/// path unchanged.
pub fn canonicalize_path(path: &Path) -> PathBuf {
    path.canonicalize()
        .map(|p| normalize_path(&p))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Cross-platform atomic rename that handles Windows file replacement.
///
/// On Unix, `fs::rename` atomically replaces the target if it exists.
/// On Windows, `fs::rename` fails if the target exists (needs
/// `MOVEFILE_REPLACE_EXISTING`), so the target is deleted first.
///
/// Scaffold writes and config saves go through this so an aborted operation
/// never leaves a half-written file at the destination.
pub fn atomic_rename(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.exists() {
            std::fs::remove_file(dst)?;
        }
    }
    std::fs::rename(src, dst)
}
