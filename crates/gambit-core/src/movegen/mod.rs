//! Pseudo-legal move generation, one generator per piece kind.
//!
//! Generators never look at whose turn it is and never test whether a move
//! leaves the mover's king attacked; that filtering lives in
//! [`Game`](crate::game::Game).

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

pub(crate) use self::king::gen_king;
pub(crate) use self::knights::gen_knight;
pub(crate) use self::pawns::gen_pawn;
pub(crate) use self::sliders::{gen_bishop, gen_queen, gen_rook};

/// Growable buffer of generated moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return `true` if `mv` is in the list.
    #[inline]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Keep only the moves for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&Move) -> bool) {
        self.moves.retain(keep);
    }

    /// Append all moves from `other`.
    pub fn extend_from(&mut self, other: &MoveList) {
        self.moves.extend_from_slice(&other.moves);
    }

    /// Iterate over the moves.
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

/// What occupies a target square, from the mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Empty,
    Enemy,
    Friendly,
}

#[inline]
fn target(board: &Board, sq: Square, us: Color) -> Target {
    match board.piece_at(sq) {
        None => Target::Empty,
        Some(piece) if piece.color() == us => Target::Friendly,
        Some(_) => Target::Enemy,
    }
}

/// Push single-step moves to each on-board offset not held by a friendly piece.
///
/// Shared by the king and the knight: neither can be blocked on the way.
fn gen_steps(board: &Board, from: Square, us: Color, offsets: &[(i8, i8)], list: &mut MoveList) {
    for &(dr, df) in offsets {
        if let Some(to) = from.offset(dr, df) {
            if target(board, to, us) != Target::Friendly {
                list.push(Move::new(from, to));
            }
        }
    }
}
