//! Error types and exit codes for scaffora

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Main error type for scaffora operations
#[derive(Error, Debug)]
pub enum ScafforaError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("No C# projects could be found under {root}")]
    NoProjects { root: String },

    #[error("File already exists: {path}")]
    FileExists { path: String },

    #[error("Invalid file name: {name} (only letters, digits and underscores are allowed)")]
    InvalidFileName { name: String },

    #[error("Namespace could not be determined for {path}")]
    NamespaceUnresolved { path: String },

    #[error("Unknown template: {name}")]
    TemplateNotFound { name: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Cancelled")]
    Cancelled,

    #[error("IO error on {}: {message}", path.display())]
    IoError { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScafforaError {
    /// Convert error to the process exit code:
    /// - 0: Success
    /// - 1: File not found / IO error
    /// - 2: Nothing to scaffold from (no projects, unknown template)
    /// - 3: Recoverable user error (bad name, existing file, unresolved namespace)
    /// - 4: Configuration error
    /// - 5: Cancelled by the user
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::FileNotFound { .. } => ExitCode::from(1),
            Self::NoProjects { .. } => ExitCode::from(2),
            Self::TemplateNotFound { .. } => ExitCode::from(2),
            Self::FileExists { .. } => ExitCode::from(3),
            Self::InvalidFileName { .. } => ExitCode::from(3),
            Self::NamespaceUnresolved { .. } => ExitCode::from(3),
            Self::ConfigError { .. } => ExitCode::from(4),
            Self::Cancelled => ExitCode::from(5),
            Self::IoError { .. } => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

/// Result type alias for scaffora operations
pub type Result<T> = std::result::Result<T, ScafforaError>;
