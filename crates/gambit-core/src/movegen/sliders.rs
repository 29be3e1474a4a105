//! Sliding piece (bishop, rook, queen) move generation.

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

use super::{MoveList, Target, target};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];

/// Generate rook moves along ranks and files.
pub(crate) fn gen_rook(board: &Board, from: Square, us: Color, list: &mut MoveList) {
    gen_rays(board, from, us, &ORTHOGONAL, list);
}

/// Generate bishop moves along diagonals.
pub(crate) fn gen_bishop(board: &Board, from: Square, us: Color, list: &mut MoveList) {
    gen_rays(board, from, us, &DIAGONAL, list);
}

/// Generate queen moves: rook and bishop rays combined.
pub(crate) fn gen_queen(board: &Board, from: Square, us: Color, list: &mut MoveList) {
    gen_rays(board, from, us, &ORTHOGONAL, list);
    gen_rays(board, from, us, &DIAGONAL, list);
}

/// Walk each direction until the edge or the first occupied square.
///
/// An enemy on the stopping square is a capture; a friendly piece is not.
fn gen_rays(board: &Board, from: Square, us: Color, directions: &[(i8, i8)], list: &mut MoveList) {
    for &(dr, df) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(dr, df) {
            match target(board, to, us) {
                Target::Empty => list.push(Move::new(from, to)),
                Target::Enemy => {
                    list.push(Move::new(from, to));
                    break;
                }
                Target::Friendly => break,
            }
            cursor = to;
        }
    }
}
