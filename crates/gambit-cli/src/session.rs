//! A single-match session: one game, the match bookkeeping around it, and a
//! line-oriented command loop.
//!
//! The engine knows nothing about a match being over. The session records
//! that here, after checkmate, stalemate, or resignation, and refuses
//! further moves until a new match or position is loaded.

use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Color, Game, GameStatus, Move, Square};

use crate::command::{Command, Orientation, SessionOption, parse_command};
use crate::error::CommandError;

/// How a finished match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The loser was checkmated.
    Checkmate { winner: Color },
    /// The side to move had no legal move and was not in check.
    Stalemate,
    /// The loser conceded.
    Resignation { winner: Color },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{winner} won by checkmate"),
            Outcome::Stalemate => write!(f, "drawn by stalemate"),
            Outcome::Resignation { winner } => write!(f, "{winner} won by resignation"),
        }
    }
}

/// Whether the match still accepts moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    InProgress,
    Ended(Outcome),
}

/// Knobs adjustable via `set`.
struct SessionConfig {
    /// Side the board is drawn from.
    orientation: Orientation,
    /// Print the legal moves of the side to move after every move.
    hints: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::White,
            hints: false,
        }
    }
}

const HELP: &str = "\
commands:
  new                      start a new match
  board                    draw the board
  moves <square>           list legal moves of the piece on a square
  move <from><to>[promo]   play a move, e.g. move e2e4 or move e7 e8 q
  status                   show side to move and check state
  resign                   the side to move resigns
  position startpos|<fen>  load a position
  fen                      print the position string
  set orientation white|black|auto
  set hints on|off
  quit                     leave";

/// Owns one [`Game`] exclusively; every mutation goes through `&mut self`.
pub struct Session {
    game: Game,
    state: MatchState,
    config: SessionConfig,
}

impl Session {
    /// Create a session holding a fresh match.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            state: MatchState::InProgress,
            config: SessionConfig::default(),
        }
    }

    /// Return the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Return whether the match is still in progress.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Read commands from `input` until `quit` or end of input, writing replies to `out`.
    pub fn run<R: BufRead, W: Write>(mut self, input: R, mut out: W) -> Result<(), CommandError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, &mut out)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(out, "error: {e}")?;
                }
            }
            out.flush()?;
        }
        Ok(())
    }

    /// Execute one parsed command.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<()> {
        match cmd {
            Command::New => self.handle_new(out),
            Command::Board => self.handle_board(out),
            Command::Moves(sq) => self.handle_moves(sq, out),
            Command::Move(mv) => self.handle_move(mv, out),
            Command::Status => self.handle_status(out),
            Command::Resign => self.handle_resign(out),
            Command::Position(game) => self.handle_position(game, out),
            Command::Fen => writeln!(out, "{}", self.game),
            Command::Set(option) => self.handle_set(option, out),
            Command::Help => writeln!(out, "{HELP}"),
            Command::Quit => Ok(()),
            Command::Unknown(word) if word.is_empty() => Ok(()),
            Command::Unknown(word) => writeln!(out, "error: unknown command: {word}"),
        }
    }

    fn handle_new<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.game = Game::new();
        self.state = MatchState::InProgress;
        info!("new match");
        writeln!(out, "ok new match, white to move")
    }

    fn handle_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let perspective = self.config.orientation.resolve(self.game.team_turn());
        writeln!(out, "{}", self.game.board().pretty(perspective))
    }

    fn handle_moves<W: Write>(&self, sq: Square, out: &mut W) -> io::Result<()> {
        let moves = self.game.valid_moves(sq);
        if moves.is_empty() {
            return writeln!(out, "no legal moves from {sq}");
        }
        writeln!(out, "{}", join_moves(moves.iter()))
    }

    fn handle_move<W: Write>(&mut self, mv: Move, out: &mut W) -> io::Result<()> {
        if let MatchState::Ended(outcome) = self.state {
            return writeln!(out, "error: the match is over, {outcome}");
        }

        match self.game.make_move(mv) {
            Ok(()) => {
                writeln!(out, "ok {mv}")?;
                self.report_position(out)?;
                if self.config.hints && self.state == MatchState::InProgress {
                    let to_move = self.game.team_turn();
                    let legal = self.game.legal_moves(to_move);
                    writeln!(out, "{to_move} can play: {}", join_moves(legal.iter()))?;
                }
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, mv = %mv, "move rejected");
                writeln!(out, "error: {e}")
            }
        }
    }

    /// Announce check, checkmate, or stalemate of the side to move, ending
    /// the match on the latter two.
    fn report_position<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let to_move = self.game.team_turn();
        match self.game.status(to_move) {
            GameStatus::Normal => Ok(()),
            GameStatus::Check => writeln!(out, "check: {to_move} is in check"),
            GameStatus::Checkmate => {
                let winner = to_move.flip();
                self.end_match(Outcome::Checkmate { winner });
                writeln!(out, "checkmate: {to_move} is mated, {winner} wins")
            }
            GameStatus::Stalemate => {
                self.end_match(Outcome::Stalemate);
                writeln!(out, "stalemate: {to_move} has no legal moves, the match is drawn")
            }
        }
    }

    fn handle_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let to_move = self.game.team_turn();
        match self.state {
            MatchState::Ended(outcome) => writeln!(out, "match over: {outcome}"),
            MatchState::InProgress if self.game.is_in_check(to_move) => {
                writeln!(out, "{to_move} to move, in check")
            }
            MatchState::InProgress => writeln!(out, "{to_move} to move"),
        }
    }

    fn handle_resign<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if let MatchState::Ended(outcome) = self.state {
            return writeln!(out, "error: the match is over, {outcome}");
        }
        let loser = self.game.team_turn();
        let winner = loser.flip();
        self.end_match(Outcome::Resignation { winner });
        writeln!(out, "{loser} resigns, {winner} wins")
    }

    fn handle_position<W: Write>(&mut self, game: Game, out: &mut W) -> io::Result<()> {
        self.game.set_board(*game.board());
        self.game.set_team_turn(game.team_turn());
        self.state = MatchState::InProgress;
        info!(position = %self.game, "position loaded");
        writeln!(out, "ok {} to move", self.game.team_turn())?;
        self.report_position(out)
    }

    fn handle_set<W: Write>(&mut self, option: SessionOption, out: &mut W) -> io::Result<()> {
        match option {
            SessionOption::Orientation(orientation) => self.config.orientation = orientation,
            SessionOption::Hints(on) => self.config.hints = on,
        }
        writeln!(out, "ok")
    }

    fn end_match(&mut self, outcome: Outcome) {
        info!(%outcome, "match ended");
        self.state = MatchState::Ended(outcome);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

fn join_moves<'a>(moves: impl Iterator<Item = &'a Move>) -> String {
    moves.map(|m| m.to_uci()).collect::<Vec<_>>().join(" ")
}
