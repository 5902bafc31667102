//! Binary entry point for snipport.
//!
//! Two subcommands, one per conversion direction: `import` turns an
//! Alfred snippet bundle into an Espanso YAML document, `export` turns
//! a document back into a bundle.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow prints in the binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Snipport - convert snippet collections between Alfred bundles and
/// Espanso YAML documents.
#[derive(Parser)]
#[command(name = "snipport")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Import an Alfred snippet bundle into an Espanso YAML document.
    Import {
        /// Path to the `.alfredsnippets` bundle.
        bundle: PathBuf,
    },

    /// Export an Espanso YAML document as an Alfred snippet bundle.
    Export {
        /// Path to the `.yml` document.
        document: PathBuf,

        /// PNG image to embed as the collection icon.
        #[arg(long)]
        icon: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = snipport::observability::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Import { bundle } => commands::cmd_import(&bundle),
        Commands::Export { document, icon } => commands::cmd_export(&document, icon),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}
