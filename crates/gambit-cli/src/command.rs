//! Command parsing for the match driver.

use gambit_core::{Color, Game, Move, NotationError, STARTING_FEN, Square};

use crate::error::CommandError;

/// Which side of the table the board is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Always from White's side.
    White,
    /// Always from Black's side.
    Black,
    /// From the side to move.
    SideToMove,
}

impl Orientation {
    /// Resolve to a fixed color given the side to move.
    pub fn resolve(self, to_move: Color) -> Color {
        match self {
            Orientation::White => Color::White,
            Orientation::Black => Color::Black,
            Orientation::SideToMove => to_move,
        }
    }
}

/// A session option set through `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `set orientation white|black|auto`
    Orientation(Orientation),
    /// `set hints on|off`: print the legal moves of the side to move after each move.
    Hints(bool),
}

/// A parsed driver command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `new` -- start a fresh match from the standard position.
    New,
    /// `board` -- draw the board.
    Board,
    /// `moves <square>` -- list the legal moves of the piece on a square.
    Moves(Square),
    /// `move <uci>` or `move <from> <to> [promo]` -- play a move.
    Move(Move),
    /// `status` -- report side to move and check state.
    Status,
    /// `resign` -- the side to move concedes.
    Resign,
    /// `position startpos | <fen>` -- resume from a stored position.
    Position(Game),
    /// `fen` -- print the current position string.
    Fen,
    /// `set <option> <value>` -- adjust a session option.
    Set(SessionOption),
    /// `help` -- list commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command word.
    Unknown(String),
}

/// Parse a single input line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "board" => Ok(Command::Board),
        "status" => Ok(Command::Status),
        "resign" => Ok(Command::Resign),
        "fen" => Ok(Command::Fen),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "moves" => parse_moves(&tokens[1..]),
        "move" => parse_move(&tokens[1..]),
        "position" => parse_position(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

fn parse_moves(tokens: &[&str]) -> Result<Command, CommandError> {
    let token = tokens.first().ok_or(CommandError::MissingArgument {
        command: "moves",
        expected: "a square such as e2",
    })?;
    let square = Square::from_algebraic(token).ok_or_else(|| NotationError::InvalidSquare {
        found: token.to_string(),
    })?;
    Ok(Command::Moves(square))
}

/// Accepts `e2e4`, `e2 e4`, `e7e8q`, and `e7 e8 q`.
fn parse_move(tokens: &[&str]) -> Result<Command, CommandError> {
    if tokens.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "move",
            expected: "a move such as e2e4",
        });
    }
    let mv: Move = tokens.concat().parse()?;
    Ok(Command::Move(mv))
}

fn parse_position(tokens: &[&str]) -> Result<Command, CommandError> {
    let game = match tokens {
        [] => {
            return Err(CommandError::MissingArgument {
                command: "position",
                expected: "startpos or a position string",
            });
        }
        ["startpos"] => STARTING_FEN.parse::<Game>()?,
        fields => fields.join(" ").parse::<Game>()?,
    };
    Ok(Command::Position(game))
}

fn parse_set(tokens: &[&str]) -> Result<Command, CommandError> {
    let (name, value) = match tokens {
        [name, value] => (*name, *value),
        _ => {
            return Err(CommandError::MissingArgument {
                command: "set",
                expected: "an option name and a value",
            });
        }
    };

    let invalid_value = || CommandError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
    };

    let option = match name {
        "orientation" => SessionOption::Orientation(match value {
            "white" => Orientation::White,
            "black" => Orientation::Black,
            "auto" => Orientation::SideToMove,
            _ => return Err(invalid_value()),
        }),
        "hints" => SessionOption::Hints(match value {
            "on" | "true" => true,
            "off" | "false" => false,
            _ => return Err(invalid_value()),
        }),
        _ => {
            return Err(CommandError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}

#[cfg(test)]
mod tests {
    use gambit_core::{Color, Game, Move, PromotionPiece, Square};

    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("new").unwrap(), Command::New);
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("  status ").unwrap(), Command::Status);
        assert_eq!(parse_command("resign").unwrap(), Command::Resign);
        assert_eq!(parse_command("fen").unwrap(), Command::Fen);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse_command("castle kingside").unwrap(),
            Command::Unknown("castle".to_string())
        );
        assert_eq!(parse_command("").unwrap(), Command::Unknown(String::new()));
    }

    #[test]
    fn parse_move_joined_and_split() {
        let expected = Command::Move(Move::new(Square::E2, Square::E4));
        assert_eq!(parse_command("move e2e4").unwrap(), expected);
        assert_eq!(parse_command("move e2 e4").unwrap(), expected);
    }

    #[test]
    fn parse_move_promotion() {
        let expected = Command::Move(Move::new_promotion(
            Square::E7,
            Square::E8,
            PromotionPiece::Knight,
        ));
        assert_eq!(parse_command("move e7e8n").unwrap(), expected);
        assert_eq!(parse_command("move e7 e8 n").unwrap(), expected);
    }

    #[test]
    fn parse_move_errors() {
        assert!(matches!(
            parse_command("move"),
            Err(CommandError::MissingArgument { command: "move", .. })
        ));
        assert!(matches!(
            parse_command("move e2e9"),
            Err(CommandError::Notation { .. })
        ));
    }

    #[test]
    fn parse_moves_square() {
        assert_eq!(parse_command("moves g1").unwrap(), Command::Moves(Square::G1));
        assert!(parse_command("moves").is_err());
        assert!(parse_command("moves z9").is_err());
    }

    #[test]
    fn parse_position_startpos() {
        assert_eq!(
            parse_command("position startpos").unwrap(),
            Command::Position(Game::new())
        );
    }

    #[test]
    fn parse_position_fen() {
        let cmd = parse_command("position 7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        match cmd {
            Command::Position(game) => {
                assert_eq!(game.team_turn(), Color::Black);
                assert_eq!(game.board().piece_count(), 3);
            }
            other => panic!("expected Position, got {other:?}"),
        }
        assert!(parse_command("position 8/8 w").is_err());
        assert!(parse_command("position").is_err());
    }

    #[test]
    fn parse_set_options() {
        assert_eq!(
            parse_command("set orientation black").unwrap(),
            Command::Set(SessionOption::Orientation(Orientation::Black))
        );
        assert_eq!(
            parse_command("set orientation auto").unwrap(),
            Command::Set(SessionOption::Orientation(Orientation::SideToMove))
        );
        assert_eq!(
            parse_command("set hints on").unwrap(),
            Command::Set(SessionOption::Hints(true))
        );
    }

    #[test]
    fn parse_set_errors() {
        assert!(matches!(
            parse_command("set hints maybe"),
            Err(CommandError::InvalidValue { .. })
        ));
        assert!(matches!(
            parse_command("set colour white"),
            Err(CommandError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse_command("set hints"),
            Err(CommandError::MissingArgument { command: "set", .. })
        ));
    }

    #[test]
    fn orientation_resolves() {
        assert_eq!(Orientation::White.resolve(Color::Black), Color::White);
        assert_eq!(Orientation::SideToMove.resolve(Color::Black), Color::Black);
    }
}
