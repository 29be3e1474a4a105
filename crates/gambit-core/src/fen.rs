//! Position strings: FEN piece placement for [`Board`], placement plus side
//! to move for [`Game`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::NotationError;
use crate::game::Game;
use crate::piece::Piece;
use crate::square::Square;

/// The standard starting position, White to move.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

impl FromStr for Board {
    type Err = NotationError;

    /// Parse the piece placement field of a FEN string.
    fn from_str(placement: &str) -> Result<Board, NotationError> {
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(NotationError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();

        for (rank_index, rank_str) in ranks.iter().enumerate() {
            // FEN ranks go from 8 to 1 (top to bottom)
            let rank = 8 - rank_index as u8;
            let mut file: usize = 0;

            for c in rank_str.chars() {
                let piece = if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(NotationError::InvalidPieceChar { character: c });
                    }
                    file += digit as usize;
                    None
                } else {
                    file += 1;
                    Some(
                        Piece::from_fen_char(c)
                            .ok_or(NotationError::InvalidPieceChar { character: c })?,
                    )
                };

                if file > 8 {
                    return Err(NotationError::BadRankLength {
                        rank_index,
                        length: file,
                    });
                }
                if let Some(piece) = piece {
                    board.set_piece(Square::new(rank, file as u8), Some(piece));
                }
            }

            if file != 8 {
                return Err(NotationError::BadRankLength {
                    rank_index,
                    length: file,
                });
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (1u8..=8).rev() {
            let mut empty_count = 0u8;

            for file in 1u8..=8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 1 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Game {
    type Err = NotationError;

    /// Parse `<placement> [w|b]`. A missing side defaults to White; any further
    /// FEN fields (castling, en passant, counters) are ignored.
    fn from_str(fen: &str) -> Result<Game, NotationError> {
        let mut fields = fen.split_whitespace();
        let board: Board = fields.next().ok_or(NotationError::Empty)?.parse()?;

        let turn = match fields.next() {
            None => Color::White,
            Some(side) => {
                let mut chars = side.chars();
                match (chars.next().and_then(Color::from_fen_char), chars.next()) {
                    (Some(color), None) => color,
                    _ => {
                        return Err(NotationError::InvalidColor {
                            found: side.to_string(),
                        });
                    }
                }
            }
        };

        Ok(Game::from_parts(board, turn))
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.board(), self.team_turn().fen_char())
    }
}
