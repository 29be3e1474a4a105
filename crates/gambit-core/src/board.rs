//! The board: an 8x8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout shared by both sides, file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Piece placement on an 8x8 grid.
///
/// The board knows nothing about turns or legality; it only guarantees that
/// each square holds at most one piece. Accessing an off-board [`Square`]
/// panics.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares in rank-major order, a1 first.
    squares: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            squares: [None; Square::COUNT],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        board.reset();
        board
    }

    /// Clear the board and place the standard 32-piece opening layout.
    pub fn reset(&mut self) {
        self.squares = [None; Square::COUNT];
        for (file, kind) in (1u8..=8).zip(BACK_RANK) {
            self.set_piece(Square::new(1, file), Some(Piece::new(Color::White, kind)));
            self.set_piece(Square::new(2, file), Some(Piece::WHITE_PAWN));
            self.set_piece(Square::new(7, file), Some(Piece::BLACK_PAWN));
            self.set_piece(Square::new(8, file), Some(Piece::new(Color::Black, kind)));
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Put `piece` on `sq`, replacing whatever was there. `None` clears the square.
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index()] = piece;
    }

    /// Clear `sq` and return the piece that stood there.
    #[inline]
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Return `true` if the given square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Iterate over every occupied square and its piece, a1 to h8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares and pieces of one side.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.is_some()).count()
    }

    /// Return the square of `color`'s king, or `None` if that side has no king.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }

    /// Return a printable 8x8 grid seen from `perspective`'s side of the table.
    pub fn pretty(&self, perspective: Color) -> PrettyBoard<'_> {
        PrettyBoard {
            board: self,
            perspective,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid.
///
/// White's perspective puts rank 8 on top and the a-file on the left; Black's
/// perspective rotates the board half a turn.
pub struct PrettyBoard<'a> {
    board: &'a Board,
    perspective: Color,
}

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (ranks, files): (Vec<u8>, Vec<u8>) = match self.perspective {
            Color::White => ((1..=8).rev().collect(), (1..=8).collect()),
            Color::Black => ((1..=8).collect(), (1..=8).rev().collect()),
        };

        for &rank in &ranks {
            write!(f, "{rank}  ")?;
            for (i, &file) in files.iter().enumerate() {
                let c = self
                    .board
                    .piece_at(Square::new(rank, file))
                    .map_or('.', |piece| piece.fen_char());
                if i < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }

        let labels: Vec<String> = files
            .iter()
            .map(|&file| ((b'a' + file - 1) as char).to_string())
            .collect();
        write!(f, "   {}", labels.join(" "))
    }
}
