//! Analyze command - search a single position

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    cli::{
        commands::{init_logging, player_arg},
        output::{
            create_spinner, describe_outcome, print_kv, print_section, print_stats, render_board,
        },
    },
    search::{EngineKind, Score, SearchStats},
    tictactoe::{Board, Move, Outcome, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Find the best move for a position")]
pub struct AnalyzeArgs {
    /// Board cells in row-major order, e.g. "XX./OO./..." ('/' and spaces are ignored)
    pub board: String,

    /// Search algorithm
    #[arg(long, short = 'e', value_enum, default_value_t = EngineKind::AlphaBeta)]
    pub engine: EngineKind,

    /// Search for this side (`x` or `o`) instead of the side to move
    #[arg(long, value_parser = player_arg)]
    pub side: Option<Player>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Everything `analyze` reports about one position
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub board: String,
    pub size: usize,
    pub to_move: Player,
    pub outcome: Outcome,
    pub reachable: bool,
    pub engine: EngineKind,
    pub side: Player,
    pub score: Score,
    pub best_move: Option<Move>,
    pub stats: SearchStats,
    pub elapsed_ms: u64,
}

pub fn execute(args: AnalyzeArgs, verbose: bool) -> Result<()> {
    init_logging("warn", verbose);

    let board = Board::from_string(&args.board)
        .with_context(|| format!("Failed to parse board '{}'", args.board))?;

    let spinner = (!args.json).then(|| create_spinner("Searching..."));
    let report = analyze(&board, args.engine, args.side);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&board, &report);
    }
    Ok(())
}

/// Search `board` for `side` (default: the side to move) with `engine`.
pub fn analyze(board: &Board, engine: EngineKind, side: Option<Player>) -> AnalysisReport {
    let side = side.unwrap_or_else(|| board.current_player());
    let mut searcher = engine.into_engine();

    let start = Instant::now();
    let evaluation = searcher.search(board, side.is_maximizing());
    let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    AnalysisReport {
        board: board.encode(),
        size: board.size(),
        to_move: board.current_player(),
        outcome: board.outcome(),
        reachable: board.is_valid(),
        engine,
        side,
        score: evaluation.score,
        best_move: evaluation.best_move,
        stats: searcher.stats(),
        elapsed_ms,
    }
}

fn print_report(board: &Board, report: &AnalysisReport) {
    print_section(&format!("{0}x{0} position", report.size));
    print!("{}", render_board(board));

    println!();
    print_kv("Status", &describe_outcome(board));
    print_kv("Reachable", if report.reachable { "yes" } else { "no" });
    print_kv("Engine", report.engine.as_str());
    print_kv("Searching for", &report.side.to_string());
    print_kv("Score", &format_score(report.score));
    print_kv(
        "Best move",
        &report
            .best_move
            .map_or_else(|| "none (game over)".to_string(), |mv| mv.to_string()),
    );

    println!();
    print_stats(&report.stats);
    print_kv("Elapsed", &format!("{} ms", report.elapsed_ms));
}

fn format_score(score: Score) -> String {
    match score {
        1 => "+1 (X wins)".to_string(),
        -1 => "-1 (O wins)".to_string(),
        0 => "0 (draw)".to_string(),
        other => other.to_string(),
    }
}
