//! Raw move application via copy-make, and attack detection.
//!
//! Nothing here checks legality. [`Game`](crate::game::Game) decides which
//! moves may be applied; these helpers only move pieces around.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

impl Board {
    /// Apply `mv` in place: lift the piece from the start square and drop it,
    /// or its promoted replacement, on the end square.
    ///
    /// The promoted piece takes the mover's color. An empty start square
    /// leaves the board unchanged.
    pub fn apply_move(&mut self, mv: Move) {
        let Some(piece) = self.remove_piece(mv.start()) else {
            return;
        };
        let landed = match mv.promotion() {
            Some(promo) => Piece::new(piece.color(), promo.to_piece_kind()),
            None => piece,
        };
        self.set_piece(mv.end(), Some(landed));
    }

    /// Return a copy of this board with `mv` applied.
    #[must_use]
    pub fn with_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply_move(mv);
        next
    }

    /// Return `true` if any piece of `by_color` has a pseudo-legal move ending on `sq`.
    pub fn is_attacked_by(&self, sq: Square, by_color: Color) -> bool {
        self.pieces_of(by_color).any(|(from, piece)| {
            piece
                .piece_moves(self, from)
                .iter()
                .any(|mv| mv.end() == sq)
        })
    }
}
