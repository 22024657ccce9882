//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ide_content::Position;

/// Elm IDE support - source editing, listing and indexing for Elm projects
#[derive(Parser, Debug)]
#[command(name = "elm-ide")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file (TOML, JSON or YAML) instead of the default location
    #[arg(long, global = true, env = "ELM_IDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Replace an inclusive line/column range of a file
    ///
    /// Positions are zero-based LINE:COLUMN pairs; both ends are replaced.
    ///
    /// Examples:
    ///   elm-ide replace src/Main.elm --from 3:4 --to 3:9 --text view
    Replace {
        /// File to edit
        file: PathBuf,

        /// First replaced position (LINE:COLUMN)
        #[arg(long)]
        from: Position,

        /// Last replaced position (LINE:COLUMN)
        #[arg(long)]
        to: Position,

        /// Replacement text
        #[arg(long, default_value = "")]
        text: String,
    },

    /// List the files a search index should cover
    Index {
        /// Project root containing elm.json
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output entries with their content as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the project's own Elm source files
    Sources {
        /// Project root containing elm.json
        #[arg(default_value = ".")]
        root: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Serve commands as JSON lines over stdin/stdout
    Serve {
        /// Project to open before reading commands
        #[arg(long)]
        project: Option<PathBuf>,
    },
}
