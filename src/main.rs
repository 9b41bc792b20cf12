//! scaffora CLI entry point

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scaffora::commands::{
    run_config, run_new, run_projects, run_resolve, run_templates, CommandContext,
};
use scaffora::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let ctx = CommandContext::from_cli(cli.format, cli.verbose);

    let result = match &cli.command {
        Commands::New(args) => run_new(&ctx, args),
        Commands::Templates(args) => run_templates(&ctx, args),
        Commands::Projects(args) => run_projects(&ctx, args),
        Commands::Resolve(args) => run_resolve(&ctx, args),
        Commands::Config(args) => run_config(&ctx, args),
    };

    match result {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output.trim_end_matches('\n'));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

/// Logs go to stderr so stdout stays clean for command output.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "scaffora=debug"
    } else {
        "scaffora=warn"
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
