//! Pawn move generation.

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::square::Square;

use super::{MoveList, Target, target};

/// Generate pawn pushes, double pushes, and diagonal captures.
///
/// Any move onto the promotion rank is emitted once per [`PromotionPiece`]
/// instead of as a plain move. En passant is not generated.
pub(crate) fn gen_pawn(board: &Board, from: Square, us: Color, list: &mut MoveList) {
    let forward = us.forward();

    if let Some(one) = from.offset(forward, 0) {
        if target(board, one, us) == Target::Empty {
            push_pawn_move(from, one, us, list);

            if from.rank() == us.pawn_rank() {
                if let Some(two) = one.offset(forward, 0) {
                    if target(board, two, us) == Target::Empty {
                        list.push(Move::new(from, two));
                    }
                }
            }
        }
    }

    for file_delta in [-1, 1] {
        if let Some(diag) = from.offset(forward, file_delta) {
            if target(board, diag, us) == Target::Enemy {
                push_pawn_move(from, diag, us, list);
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, us: Color, list: &mut MoveList) {
    if to.rank() == us.promotion_rank() {
        for promo in PromotionPiece::ALL {
            list.push(Move::new_promotion(from, to, promo));
        }
    } else {
        list.push(Move::new(from, to));
    }
}
