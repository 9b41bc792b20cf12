//! Command modules for the scaffora CLI
//!
//! Each command module implements a single top-level command:
//! - `new` - scaffold a file, prompting for anything not given as a flag
//! - `templates` - list available templates
//! - `projects` - list discovered project files
//! - `resolve` - show the namespace a new file would receive
//! - `config` - configuration management
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext` for output format and verbosity, and return
//! the text to print on stdout.

pub mod config;
pub mod new;
pub mod projects;
pub mod resolve;
pub mod templates;

pub use config::run_config;
pub use new::run_new;
pub use projects::run_projects;
pub use resolve::run_resolve;
pub use templates::run_templates;

use crate::cli::OutputFormat;

/// Shared context passed to all command handlers
#[derive(Debug, Clone, Copy)]
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            verbose: false,
        }
    }
}

impl CommandContext {
    /// Create a new CommandContext from CLI args
    pub fn from_cli(format: OutputFormat, verbose: bool) -> Self {
        Self { format, verbose }
    }
}
