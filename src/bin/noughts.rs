//! noughts - N×N Tic-Tac-Toe with exhaustive game-tree search
//!
//! - `analyze`: score a position and report the engine's move
//! - `play`: interactive game on the terminal, optionally against the engine

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "N×N Tic-Tac-Toe with minimax search", long_about = None)]
struct Cli {
    /// Log search and game events at debug level
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best move for a position
    Analyze(noughts::cli::commands::analyze::AnalyzeArgs),

    /// Play a game on the terminal
    Play(noughts::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => noughts::cli::commands::analyze::execute(args, cli.verbose),
        Commands::Play(args) => noughts::cli::commands::play::execute(args, cli.verbose),
    }
}
