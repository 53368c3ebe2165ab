//! Story presets CLI
//!
//! Loads layered preset configuration for a project and shows how presets
//! resolve.

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use context::CliContext;
use error::{CliError, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)
        .map_err(|e| CliError::user(format!("Failed to initialise logging: {e}")))?;
    tracing::debug!(?cli, "Parsed arguments");

    let project_root = match cli.project {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let ctx = CliContext {
        project_root,
        config_dir: cli.config_dir,
        framework: cli.framework,
    };

    execute_command(&ctx, cli.command).await
}

async fn execute_command(ctx: &CliContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve { name, default } => {
            commands::run_resolve(ctx, &name, default.as_deref()).await
        }
        Commands::List => commands::run_list(ctx),
        Commands::MdxOptions { id } => commands::run_mdx_options(ctx, &id).await,
    }
}
