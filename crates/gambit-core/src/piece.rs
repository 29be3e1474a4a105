//! Colored chess pieces.

use std::fmt;

use crate::board::Board;
use crate::color::Color;
use crate::movegen::{self, MoveList};
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A colored chess piece. Immutable once built; promotion produces a new value.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    /// White king.
    pub const WHITE_KING: Piece = Piece::new(Color::White, PieceKind::King);
    /// White queen.
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, PieceKind::Queen);
    /// White bishop.
    pub const WHITE_BISHOP: Piece = Piece::new(Color::White, PieceKind::Bishop);
    /// White knight.
    pub const WHITE_KNIGHT: Piece = Piece::new(Color::White, PieceKind::Knight);
    /// White rook.
    pub const WHITE_ROOK: Piece = Piece::new(Color::White, PieceKind::Rook);
    /// White pawn.
    pub const WHITE_PAWN: Piece = Piece::new(Color::White, PieceKind::Pawn);

    /// Black king.
    pub const BLACK_KING: Piece = Piece::new(Color::Black, PieceKind::King);
    /// Black queen.
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, PieceKind::Queen);
    /// Black bishop.
    pub const BLACK_BISHOP: Piece = Piece::new(Color::Black, PieceKind::Bishop);
    /// Black knight.
    pub const BLACK_KNIGHT: Piece = Piece::new(Color::Black, PieceKind::Knight);
    /// Black rook.
    pub const BLACK_ROOK: Piece = Piece::new(Color::Black, PieceKind::Rook);
    /// Black pawn.
    pub const BLACK_PAWN: Piece = Piece::new(Color::Black, PieceKind::Pawn);

    /// Create a piece from a color and a kind.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Parse a piece letter: uppercase is White, lowercase is Black.
    #[inline]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(color, kind))
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Return the kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the piece letter, uppercase for White.
    #[inline]
    pub fn fen_char(self) -> char {
        let base = self.kind.fen_char();
        match self.color {
            Color::White => base.to_ascii_uppercase(),
            Color::Black => base,
        }
    }

    /// Every pseudo-legal move for this piece standing on `from`.
    ///
    /// Pure in `board` and `from`: the side to move is never consulted and
    /// moves that expose this side's own king are included.
    pub fn piece_moves(self, board: &Board, from: Square) -> MoveList {
        let mut list = MoveList::new();
        match self.kind {
            PieceKind::King => movegen::gen_king(board, from, self.color, &mut list),
            PieceKind::Queen => movegen::gen_queen(board, from, self.color, &mut list),
            PieceKind::Bishop => movegen::gen_bishop(board, from, self.color, &mut list),
            PieceKind::Knight => movegen::gen_knight(board, from, self.color, &mut list),
            PieceKind::Rook => movegen::gen_rook(board, from, self.color, &mut list),
            PieceKind::Pawn => movegen::gen_pawn(board, from, self.color, &mut list),
        }
        list
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_prefix = match self.color {
            Color::White => 'W',
            Color::Black => 'B',
        };
        write!(f, "{}{}", color_prefix, self.kind.fen_char().to_ascii_uppercase())
    }
}
