//! Board squares addressed by one-based rank and file.

use std::fmt;

/// A square on the board, as a one-based `(rank, file)` pair.
///
/// Rank 1 is White's back rank and file 1 is the a-file, so `Square::new(1, 1)`
/// is a1 and `Square::new(8, 8)` is h8. Construction does not range-check;
/// only [`Square::offset`] and [`Square::try_new`] guarantee an on-board result.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from a one-based rank and file.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Square {
        Square { rank, file }
    }

    /// Create a square, returning `None` if rank or file is outside `1..=8`.
    #[inline]
    pub const fn try_new(rank: u8, file: u8) -> Option<Square> {
        if rank >= 1 && rank <= 8 && file >= 1 && file <= 8 {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    /// Parse algebraic notation (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0].to_ascii_lowercase();
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Square::new(rank_byte - b'0', file_byte - b'a' + 1))
    }

    /// Return the rank (1..=8 for on-board squares).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Return the file (1..=8 for on-board squares, 1 = a-file).
    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Return `true` if both coordinates are within `1..=8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.rank >= 1 && self.rank <= 8 && self.file >= 1 && self.file <= 8
    }

    /// Step by a rank and file delta, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Square> {
        let rank = self.rank as i16 + rank_delta as i16;
        let file = self.file as i16 + file_delta as i16;
        if rank < 1 || rank > 8 || file < 1 || file > 8 {
            None
        } else {
            Some(Square::new(rank as u8, file as u8))
        }
    }

    /// Zero-based array index, rank-major (a1 = 0, h1 = 7, a8 = 56).
    ///
    /// Only meaningful for on-board squares.
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.rank as usize - 1) * 8 + (self.file as usize - 1)
    }

    /// Iterate over all 64 squares, rank by rank from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (1u8..=8).flat_map(|rank| (1u8..=8).map(move |file| Square::new(rank, file)))
    }

    // Named square constants
    pub const A1: Square = Square::new(1, 1);
    pub const B1: Square = Square::new(1, 2);
    pub const C1: Square = Square::new(1, 3);
    pub const D1: Square = Square::new(1, 4);
    pub const E1: Square = Square::new(1, 5);
    pub const F1: Square = Square::new(1, 6);
    pub const G1: Square = Square::new(1, 7);
    pub const H1: Square = Square::new(1, 8);
    pub const A2: Square = Square::new(2, 1);
    pub const B2: Square = Square::new(2, 2);
    pub const C2: Square = Square::new(2, 3);
    pub const D2: Square = Square::new(2, 4);
    pub const E2: Square = Square::new(2, 5);
    pub const F2: Square = Square::new(2, 6);
    pub const G2: Square = Square::new(2, 7);
    pub const H2: Square = Square::new(2, 8);
    pub const A3: Square = Square::new(3, 1);
    pub const B3: Square = Square::new(3, 2);
    pub const C3: Square = Square::new(3, 3);
    pub const D3: Square = Square::new(3, 4);
    pub const E3: Square = Square::new(3, 5);
    pub const F3: Square = Square::new(3, 6);
    pub const G3: Square = Square::new(3, 7);
    pub const H3: Square = Square::new(3, 8);
    pub const A4: Square = Square::new(4, 1);
    pub const B4: Square = Square::new(4, 2);
    pub const C4: Square = Square::new(4, 3);
    pub const D4: Square = Square::new(4, 4);
    pub const E4: Square = Square::new(4, 5);
    pub const F4: Square = Square::new(4, 6);
    pub const G4: Square = Square::new(4, 7);
    pub const H4: Square = Square::new(4, 8);
    pub const A5: Square = Square::new(5, 1);
    pub const B5: Square = Square::new(5, 2);
    pub const C5: Square = Square::new(5, 3);
    pub const D5: Square = Square::new(5, 4);
    pub const E5: Square = Square::new(5, 5);
    pub const F5: Square = Square::new(5, 6);
    pub const G5: Square = Square::new(5, 7);
    pub const H5: Square = Square::new(5, 8);
    pub const A6: Square = Square::new(6, 1);
    pub const B6: Square = Square::new(6, 2);
    pub const C6: Square = Square::new(6, 3);
    pub const D6: Square = Square::new(6, 4);
    pub const E6: Square = Square::new(6, 5);
    pub const F6: Square = Square::new(6, 6);
    pub const G6: Square = Square::new(6, 7);
    pub const H6: Square = Square::new(6, 8);
    pub const A7: Square = Square::new(7, 1);
    pub const B7: Square = Square::new(7, 2);
    pub const C7: Square = Square::new(7, 3);
    pub const D7: Square = Square::new(7, 4);
    pub const E7: Square = Square::new(7, 5);
    pub const F7: Square = Square::new(7, 6);
    pub const G7: Square = Square::new(7, 7);
    pub const H7: Square = Square::new(7, 8);
    pub const A8: Square = Square::new(8, 1);
    pub const B8: Square = Square::new(8, 2);
    pub const C8: Square = Square::new(8, 3);
    pub const D8: Square = Square::new(8, 4);
    pub const E8: Square = Square::new(8, 5);
    pub const F8: Square = Square::new(8, 6);
    pub const G8: Square = Square::new(8, 7);
    pub const H8: Square = Square::new(8, 8);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.file - 1) as char;
            write!(f, "{file}{}", self.rank)
        } else {
            write!(f, "({},{})", self.rank, self.file)
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}
