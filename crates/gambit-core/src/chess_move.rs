//! Move values: start square, end square, optional promotion.

use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Queen = 0,
    Rook = 1,
    Bishop = 2,
    Knight = 3,
}

impl PromotionPiece {
    /// All promotion pieces, in the order pawn generation emits them.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Queen,
        PromotionPiece::Rook,
        PromotionPiece::Bishop,
        PromotionPiece::Knight,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }

    /// Return the lowercase letter used in coordinate notation.
    pub const fn uci_char(self) -> char {
        self.to_piece_kind().fen_char()
    }

    /// Parse a promotion letter (case-insensitive).
    pub fn from_uci_char(c: char) -> Option<PromotionPiece> {
        match PieceKind::from_fen_char(c)? {
            PieceKind::Queen => Some(PromotionPiece::Queen),
            PieceKind::Rook => Some(PromotionPiece::Rook),
            PieceKind::Bishop => Some(PromotionPiece::Bishop),
            PieceKind::Knight => Some(PromotionPiece::Knight),
            PieceKind::King | PieceKind::Pawn => None,
        }
    }
}

/// A move from one square to another, with an optional promotion.
///
/// Equality is structural: two moves are equal when start, end, and
/// promotion all match. Whether a promotion makes sense is decided when the
/// move is executed, not when it is built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    start: Square,
    end: Square,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a move without promotion.
    pub const fn new(start: Square, end: Square) -> Move {
        Move {
            start,
            end,
            promotion: None,
        }
    }

    /// Create a promotion move.
    pub const fn new_promotion(start: Square, end: Square, promo: PromotionPiece) -> Move {
        Move {
            start,
            end,
            promotion: Some(promo),
        }
    }

    /// Return the start square.
    pub const fn start(self) -> Square {
        self.start
    }

    /// Return the end square.
    pub const fn end(self) -> Square {
        self.end
    }

    /// Return the promotion piece, if any.
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }

    /// Return `true` if this move carries a promotion.
    pub const fn is_promotion(self) -> bool {
        self.promotion.is_some()
    }

    /// Return the coordinate-notation string, e.g. `e2e4` or `e7e8q`.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl FromStr for Move {
    type Err = NotationError;

    /// Parse coordinate notation: `e2e4`, `e7e8q`.
    fn from_str(s: &str) -> Result<Move, NotationError> {
        let invalid = || NotationError::InvalidMove {
            found: s.to_string(),
        };

        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(invalid());
        }

        let start = Square::from_algebraic(&s[0..2]).ok_or_else(invalid)?;
        let end = Square::from_algebraic(&s[2..4]).ok_or_else(invalid)?;

        match s[4..].chars().next() {
            None => Ok(Move::new(start, end)),
            Some(c) => {
                let promo = PromotionPiece::from_uci_char(c).ok_or_else(invalid)?;
                Ok(Move::new_promotion(start, end, promo))
            }
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.promotion {
            Some(promo) => write!(f, "{}{}{}", self.start, self.end, promo.uci_char()),
            None => write!(f, "{}{}", self.start, self.end),
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
