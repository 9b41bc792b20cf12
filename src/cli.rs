//! CLI argument definitions using clap with subcommand architecture

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Template-driven C# file scaffolding with namespace inference
#[derive(Parser, Debug)]
#[command(name = "scaffora")]
#[command(about = "Scaffold new C# files from templates, inferring the namespace from the project layout")]
#[command(version)]
#[command(author)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for scaffora
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new file (interactive for anything not given as a flag)
    #[command(visible_alias = "n")]
    New(NewArgs),

    /// List available templates
    #[command(visible_alias = "t")]
    Templates(TemplatesArgs),

    /// List project files discovered under a root
    #[command(visible_alias = "p")]
    Projects(ProjectsArgs),

    /// Show the namespace a file created at a path would receive
    #[command(visible_alias = "r")]
    Resolve(ResolveArgs),

    /// Manage scaffora configuration
    Config(ConfigArgs),
}

/// Arguments for the new command
#[derive(Args, Debug)]
pub struct NewArgs {
    /// Seed path: a directory to create the file in, or an existing file
    /// whose directory seeds the directory picker
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Template to render (skips the template prompt)
    #[arg(short, long, value_name = "LABEL")]
    pub template: Option<String>,

    /// Name of the new file, without extension (skips the name prompt)
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Workspace root to search for projects (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Do not write a namespace declaration
    #[arg(long)]
    pub no_namespace: bool,

    /// Do not mirror subdirectories in the namespace
    #[arg(long)]
    pub flat_namespace: bool,
}

/// Arguments for the templates command
#[derive(Args, Debug)]
pub struct TemplatesArgs {}

/// Arguments for the projects command
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Root to search (defaults to the current directory)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path of the file that would be created (it does not have to exist)
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Workspace root to search for projects (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Set a configuration value (e.g. namespace.include false)
    Set {
        /// Dotted key path
        key: String,
        /// New value
        value: String,
    },
    /// Reset the configuration to defaults
    Reset,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_new_with_flags_parses() {
        let cli = Cli::try_parse_from([
            "scaffora", "new", "src/Models", "--template", "Class", "--name", "Customer",
        ])
        .unwrap();
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.path, Some(PathBuf::from("src/Models")));
                assert_eq!(args.template.as_deref(), Some("Class"));
                assert_eq!(args.name.as_deref(), Some("Customer"));
            }
            _ => panic!("expected new command"),
        }
    }

    #[test]
    fn test_global_format_flag() {
        let cli = Cli::try_parse_from(["scaffora", "templates", "-f", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
