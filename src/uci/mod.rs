//! Universal Chess Interface (UCI) protocol implementation.
//!
//! Reads commands line by line, drives the position and search through the
//! public board API, and writes replies to any `Write` sink.

use std::fmt;
use std::io::{self, BufRead, Write};

use crate::board::{best_move, Color, FenError, MoveError, Position, SearchResult};

pub mod command;
pub mod options;

use command::{go_depth, parse_uci_command, UciCommand};
use options::{parse_setoption, UciOptions};

/// Error type for UCI position command parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UciError {
    /// Invalid FEN string
    InvalidFen(FenError),
    /// A move in the move list did not resolve
    InvalidMove(MoveError),
    /// Missing required parts in the command
    MissingParts,
}

impl fmt::Display for UciError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UciError::InvalidFen(e) => write!(f, "Invalid FEN: {e}"),
            UciError::InvalidMove(e) => write!(f, "Invalid move: {e}"),
            UciError::MissingParts => write!(f, "Missing required parts in position command"),
        }
    }
}

impl std::error::Error for UciError {}

impl From<FenError> for UciError {
    fn from(e: FenError) -> Self {
        UciError::InvalidFen(e)
    }
}

impl From<MoveError> for UciError {
    fn from(e: MoveError) -> Self {
        UciError::InvalidMove(e)
    }
}

/// Build the position described by a `position` command.
///
/// Supports both "position startpos" and "position fen <6 fields>",
/// optionally followed by "moves <move1> <move2> ...".
pub fn parse_position_command<S: AsRef<str>>(parts: &[S]) -> Result<Position, UciError> {
    let parts: Vec<&str> = parts.iter().map(AsRef::as_ref).collect();
    let mut i = 1;

    let mut position = match parts.get(i) {
        Some(&"startpos") => {
            i += 1;
            Position::new()
        }
        Some(&"fen") => {
            let end = parts[i + 1..]
                .iter()
                .position(|p| *p == "moves")
                .map_or(parts.len(), |offset| i + 1 + offset);
            let fen = parts[i + 1..end].join(" ");
            i = end;
            Position::try_from_fen(&fen)?
        }
        _ => return Err(UciError::MissingParts),
    };

    if parts.get(i) == Some(&"moves") {
        position.apply_coordinate_moves(&parts[i + 1..])?;
    }

    Ok(position)
}

/// Centipawns from the point of view of the side to move.
fn score_cp(score: f64, side_to_move: Color) -> i64 {
    let cp = (score * 100.0).round() as i64;
    match side_to_move {
        Color::White => cp,
        Color::Black => -cp,
    }
}

/// UCI engine state: current position, options and the `debug` flag.
pub struct UciEngine<W: Write> {
    out: W,
    position: Position,
    options: UciOptions,
    debug: bool,
}

impl<W: Write> UciEngine<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        UciEngine {
            out,
            position: Position::new(),
            options: UciOptions::default(),
            debug: false,
        }
    }

    /// Current position
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn options(&self) -> &UciOptions {
        &self.options
    }

    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Consume the engine, returning its output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Process lines from `input` until `quit` or end of input.
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        for line in input.lines() {
            if !self.handle_line(&line?)? {
                break;
            }
        }
        Ok(())
    }

    /// Process one input line; returns `false` once `quit` is received.
    pub fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        let Some(cmd) = parse_uci_command(line) else {
            return Ok(true);
        };
        log::debug!("< {}", line.trim());

        match cmd {
            UciCommand::Uci => self.options.print(&mut self.out)?,
            UciCommand::IsReady => writeln!(self.out, "readyok")?,
            UciCommand::UciNewGame => self.position = Position::new(),
            UciCommand::Position(parts) => self.on_position(&parts)?,
            UciCommand::Go(parts) => self.on_go(&parts)?,
            UciCommand::SetOption(parts) => self.on_setoption(&parts)?,
            UciCommand::Debug(arg) => self.on_debug(arg.as_deref())?,
            UciCommand::Register | UciCommand::Stop | UciCommand::PonderHit => {
                if self.debug {
                    self.info(&format!("Ignoring command {}", line.trim()))?;
                }
            }
            UciCommand::Quit => return Ok(false),
            UciCommand::Unknown(word) => self.info(&format!("Unexpected command {word}"))?,
        }

        self.out.flush()?;
        Ok(true)
    }

    fn on_position(&mut self, parts: &[String]) -> io::Result<()> {
        match parse_position_command(parts) {
            Ok(position) => {
                self.position = position;
                Ok(())
            }
            Err(e) => {
                log::warn!("position rejected: {e}");
                self.info(&e.to_string())
            }
        }
    }

    fn on_go(&mut self, parts: &[String]) -> io::Result<()> {
        let depth = go_depth(parts).unwrap_or(self.options.search.depth).max(1);
        let concurrency = self.options.search.concurrency;
        log::info!(
            "searching {} at depth {depth} with {concurrency} threads",
            self.position.to_fen()
        );

        match best_move(&self.position, depth, concurrency) {
            Some(result) => {
                self.write_search_info(depth, &result)?;
                writeln!(self.out, "bestmove {}", result.best_move)
            }
            None => writeln!(self.out, "bestmove 0000"),
        }
    }

    fn write_search_info(&mut self, depth: usize, result: &SearchResult) -> io::Result<()> {
        let pv: Vec<String> = result.pv.iter().map(ToString::to_string).collect();
        writeln!(
            self.out,
            "info depth {depth} score cp {} pv {}",
            score_cp(result.score, self.position.side_to_move()),
            pv.join(" ")
        )
    }

    fn on_setoption(&mut self, parts: &[String]) -> io::Result<()> {
        let Some((name, value)) = parse_setoption(parts) else {
            return self.info("Missing option name");
        };
        if self.options.apply_setoption(&name, value.as_deref()) {
            log::info!("option {name} set to {}", value.as_deref().unwrap_or(""));
            Ok(())
        } else {
            self.info(&format!("Unsupported option {name}"))
        }
    }

    fn on_debug(&mut self, arg: Option<&str>) -> io::Result<()> {
        match arg {
            Some("on") => {
                self.debug = true;
                self.info("debug on")
            }
            Some("off") => {
                self.debug = false;
                Ok(())
            }
            Some(other) if self.debug => self.info(&format!("Unrecognized argument: {other}")),
            None if self.debug => self.info("Missing argument to debug command"),
            _ => Ok(()),
        }
    }

    fn info(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "info string {message}")
    }
}

/// Run the UCI loop on standard input and output.
pub fn run_uci_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut engine = UciEngine::new(stdout.lock());
    engine.run(stdin.lock())
}
