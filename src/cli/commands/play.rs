//! Play command - interactive game on the terminal

use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    cli::{
        commands::{init_logging, player_arg},
        output::{create_spinner, describe_outcome, render_board},
    },
    config::AppConfig,
    search::{EngineKind, SearchEngine},
    tictactoe::{BoardGeometry, Game, Move, Player},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game on the terminal")]
pub struct PlayArgs {
    /// TOML configuration file (defaults apply when it does not exist)
    #[arg(long, short = 'c', default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Board side, 3 to 5
    #[arg(long, short = 's')]
    pub size: Option<usize>,

    /// Search algorithm for engine moves
    #[arg(long, short = 'e', value_enum)]
    pub engine: Option<EngineKind>,

    /// Side the engine plays automatically (`x` or `o`)
    #[arg(long, value_parser = player_arg)]
    pub computer: Option<Player>,
}

const HELP: &str = "\
Commands:
  <row> <col>    place a mark for the side to move
  click <x> <y>  place a mark at a pixel position
  a              let the engine move
  u              undo
  y              redo
  r              restart
  h              show this help
  q              quit";

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(Move),
    Click { x: u32, y: u32 },
    Engine,
    Undo,
    Redo,
    Restart,
    Help,
    Quit,
}

impl Command {
    /// Parse a trimmed input line; `None` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let command = match tokens.as_slice() {
            [] => return Ok(None),
            ["a"] => Command::Engine,
            ["u"] => Command::Undo,
            ["y"] => Command::Redo,
            ["r"] => Command::Restart,
            ["h" | "?"] => Command::Help,
            ["q"] => Command::Quit,
            ["click", x, y] => Command::Click {
                x: parse_number(x, "x")?,
                y: parse_number(y, "y")?,
            },
            [row, col] => Command::Place(Move::new(
                parse_number(row, "row")?,
                parse_number(col, "column")?,
            )),
            _ => return Err(anyhow!("Unknown command '{}' (h for help)", line.trim())),
        };
        Ok(Some(command))
    }
}

fn parse_number<T: std::str::FromStr>(token: &str, what: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| anyhow!("Invalid {what} '{token}'"))
}

/// Game state plus the engine and pointer geometry of one terminal session
pub struct Session {
    game: Game,
    geometry: BoardGeometry,
    engine: Box<dyn SearchEngine>,
    computer: Option<Player>,
    spinner: bool,
}

impl Session {
    pub fn new(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        Ok(Session {
            game: Game::new(config.board_size)?,
            geometry: config.geometry()?,
            engine: config.engine.into_engine(),
            computer: config.computer,
            spinner: true,
        })
    }

    /// Disable the search spinner (for non-interactive runs)
    pub fn without_spinner(mut self) -> Self {
        self.spinner = false;
        self
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Apply one command. Returns `false` when the session should end.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> Result<bool> {
        match command {
            Command::Place(mv) => {
                self.game.play(mv)?;
            }
            Command::Click { x, y } => {
                let mv = self.geometry.cell_at(x, y)?;
                writeln!(out, "Pixel ({x}, {y}) is cell {mv}")?;
                self.game.play(mv)?;
            }
            Command::Engine => {
                if let Some(mv) = self.engine_move()? {
                    writeln!(out, "Engine plays {mv}")?;
                }
            }
            Command::Undo => {
                let mv = self.game.undo()?;
                writeln!(out, "Took back {mv}")?;
            }
            Command::Redo => {
                let mv = self.game.redo()?;
                writeln!(out, "Replayed {mv}")?;
            }
            Command::Restart => {
                self.game.restart();
                writeln!(out, "New game")?;
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        }

        // The engine would replay a move right after it was taken back
        if command != Command::Undo {
            self.auto_play(out)?;
        }
        self.show(out)?;
        Ok(true)
    }

    /// Let the engine move while it is the computer's turn.
    pub fn auto_play<W: Write>(&mut self, out: &mut W) -> Result<()> {
        while !self.game.is_over() && self.computer == Some(self.game.current_player()) {
            match self.engine_move()? {
                Some(mv) => writeln!(out, "Engine plays {mv}")?,
                None => break,
            }
        }
        Ok(())
    }

    fn engine_move(&mut self) -> Result<Option<Move>> {
        let spinner = self.spinner.then(|| {
            create_spinner(&format!(
                "{} searching for {}...",
                self.engine.name(),
                self.game.current_player()
            ))
        });
        let result = self.game.play_engine_move(self.engine.as_mut());
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        Ok(result?)
    }

    /// Print the board and the game status
    pub fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out)?;
        write!(out, "{}", render_board(self.game.board()))?;
        writeln!(out, "{}", describe_outcome(self.game.board()))?;
        Ok(())
    }
}

/// Read commands from `input` until `q` or end of input.
///
/// Rejected commands are reported on `out` and the loop continues.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> Result<()> {
    session.auto_play(out)?;
    session.show(out)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(out, "{err}")?;
                continue;
            }
        };
        match session.handle(command, out) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}

pub fn execute(args: PlayArgs, verbose: bool) -> Result<()> {
    let mut config = AppConfig::load_or_default(&args.config)
        .with_context(|| format!("Failed to load config from {}", args.config.display()))?;
    if let Some(size) = args.size {
        config = config.with_board_size(size);
    }
    if let Some(engine) = args.engine {
        config = config.with_engine(engine);
    }
    if let Some(computer) = args.computer {
        config = config.with_computer(computer);
    }

    init_logging(&config.log_filter, verbose);

    let mut session = Session::new(&config)?;
    println!(
        "{0}x{0} board, engine: {1}, computer: {2}",
        config.board_size,
        config.engine,
        config
            .computer
            .map_or_else(|| "none".to_string(), |player| player.to_string())
    );
    println!("{HELP}");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run(&mut session, stdin.lock(), &mut stdout)
}
