//! King move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::{MoveList, gen_steps};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Generate king moves: one step in any direction.
///
/// Castling is not generated. Destinations attacked by the opponent are
/// included; the game's self-check filter removes them.
pub(crate) fn gen_king(board: &Board, from: Square, us: Color, list: &mut MoveList) {
    gen_steps(board, from, us, &KING_OFFSETS, list);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_move::Move;
    use crate::piece::Piece;

    #[test]
    fn boxed_in_at_start() {
        let board = Board::starting_position();
        let mut list = MoveList::new();
        gen_king(&board, Square::E1, Color::White, &mut list);
        assert!(list.is_empty());
    }

    #[test]
    fn includes_attacked_squares() {
        let mut board = Board::empty();
        board.set_piece(Square::E1, Some(Piece::WHITE_KING));
        board.set_piece(Square::A2, Some(Piece::BLACK_ROOK));
        let mut list = MoveList::new();
        gen_king(&board, Square::E1, Color::White, &mut list);
        assert_eq!(list.len(), 5);
        assert!(list.contains(&Move::new(Square::E1, Square::E2)));
    }

    #[test]
    fn no_castling_moves() {
        let mut board = Board::starting_position();
        for sq in [Square::F1, Square::G1, Square::B1, Square::C1, Square::D1] {
            board.set_piece(sq, None);
        }
        let mut list = MoveList::new();
        gen_king(&board, Square::E1, Color::White, &mut list);
        assert!(!list.contains(&Move::new(Square::E1, Square::G1)));
        assert!(!list.contains(&Move::new(Square::E1, Square::C1)));
        assert_eq!(list.len(), 2);
    }
}
