//! Subcommands of the `noughts` binary

pub mod analyze;
pub mod play;

use anyhow::{Result, anyhow};

use crate::tictactoe::Player;

/// Parse a side given on the command line (`x` or `o`)
pub(crate) fn parse_player_token(value: &str, flag: &str) -> Result<Player> {
    match value.trim().to_ascii_lowercase().as_str() {
        "x" | "first" | "player1" | "p1" => Ok(Player::X),
        "o" | "second" | "player2" | "p2" => Ok(Player::O),
        other => Err(anyhow!(
            "Invalid value '{other}' for {flag} (expected 'x' or 'o')"
        )),
    }
}

/// clap value parser for `--side` / `--computer`
pub(crate) fn player_arg(value: &str) -> std::result::Result<Player, String> {
    parse_player_token(value, "player").map_err(|err| err.to_string())
}

/// Install logging for a subcommand; `--verbose` raises the crate to debug.
pub(crate) fn init_logging(default_filter: &str, verbose: bool) {
    if verbose {
        crate::logging::init(&format!("{default_filter},noughts=debug"));
    } else {
        crate::logging::init(default_filter);
    }
}
