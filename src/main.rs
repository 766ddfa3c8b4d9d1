//! Marbles CLI - play cross-shaped marble solitaire from the command line.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Marbles - a marble solitaire rules engine
#[derive(Parser, Debug)]
#[command(name = "marbles")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log every applied move to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the starting board
    Show {
        #[command(flatten)]
        board: cli::BoardArgs,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Apply a move script and print the resulting board
    Play {
        #[command(flatten)]
        board: cli::BoardArgs,

        /// Move script file (default: read stdin)
        #[arg(short, long)]
        script: Option<std::path::PathBuf>,

        /// Skip illegal moves instead of stopping
        #[arg(short, long)]
        keep_going: bool,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::logger::init_logger(args.verbose);

    let result = match args.command {
        Commands::Show { board, format } => cli::show::execute(board, format),

        Commands::Play {
            board,
            script,
            keep_going,
            format,
        } => cli::play::execute(board, script.as_deref(), keep_going, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
