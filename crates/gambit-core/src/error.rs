//! Error types for move execution and position notation.

use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

/// Reasons a [`Game`](crate::game::Game) refuses to execute a move.
///
/// Every variant is recoverable: the game is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The start square is empty.
    #[error("no piece on {square}")]
    NoPiece {
        /// The empty start square.
        square: Square,
    },
    /// The piece on the start square belongs to the side not on move.
    #[error("it is not {color}'s turn")]
    WrongTurn {
        /// Color of the piece that tried to move.
        color: Color,
    },
    /// The move is not among the piece's legal moves.
    #[error("illegal move {mv}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },
}

/// Errors from parsing squares, moves, and position strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// A move string is not coordinate notation like `e2e4` or `e7e8q`.
    #[error("invalid move notation: \"{found}\"")]
    InvalidMove {
        /// The rejected text.
        found: String,
    },
    /// A square string is not algebraic notation like `e4`.
    #[error("invalid square: \"{found}\"")]
    InvalidSquare {
        /// The rejected text.
        found: String,
    },
    /// The position string has no piece placement field.
    #[error("empty position string")]
    Empty,
    /// The piece placement does not have exactly 8 ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount {
        /// Number of ranks found.
        found: usize,
    },
    /// A rank describes more or fewer than 8 squares.
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength {
        /// Zero-based rank index as written (0 = rank 8).
        rank_index: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The side-to-move field is not `w` or `b`.
    #[error("invalid side to move: \"{found}\"")]
    InvalidColor {
        /// The rejected text.
        found: String,
    },
}

#[cfg(test)]
mod tests {
    use super::{MoveError, NotationError};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn move_error_display() {
        assert_eq!(
            format!("{}", MoveError::NoPiece { square: Square::E3 }),
            "no piece on e3"
        );
        assert_eq!(
            format!("{}", MoveError::WrongTurn { color: Color::Black }),
            "it is not black's turn"
        );
        let mv = Move::new(Square::E2, Square::E5);
        assert_eq!(format!("{}", MoveError::IllegalMove { mv }), "illegal move e2e5");
    }

    #[test]
    fn notation_error_display() {
        let err = NotationError::WrongRankCount { found: 7 };
        assert_eq!(format!("{err}"), "expected 8 ranks in piece placement, found 7");
        let err = NotationError::InvalidPieceChar { character: 'x' };
        assert_eq!(format!("{err}"), "invalid piece character: 'x'");
    }
}
