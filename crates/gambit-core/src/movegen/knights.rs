//! Knight move generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::{MoveList, gen_steps};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Generate knight moves. Knights jump, so intervening pieces never block.
pub(crate) fn gen_knight(board: &Board, from: Square, us: Color, list: &mut MoveList) {
    gen_steps(board, from, us, &KNIGHT_OFFSETS, list);
}
