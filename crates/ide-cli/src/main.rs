//! Elm IDE support CLI
//!
//! Runs the IDE operations from a terminal, or serves them to an editor
//! host as line-delimited JSON over stdin/stdout.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use ide_core::{IdeConfig, Session};

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => IdeConfig::load(path)?,
        None => IdeConfig::discover()?,
    };
    tracing::debug!(?config, "loaded configuration");

    execute_command(Session::new(config), cli.command)
}

fn execute_command(session: Session, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Replace {
            file,
            from,
            to,
            text,
        } => commands::run_replace(&session, &file, from, to, &text),
        Commands::Index { root, json } => commands::run_index(&session, &root, json),
        Commands::Sources { root, json } => commands::run_sources(&session, &root, json),
        Commands::Serve { project } => commands::run_serve(session, project),
    }
}
