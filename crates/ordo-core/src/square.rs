//! Board squares in little-endian rank-file order (A1 = 0, H8 = 63).

use std::fmt;

/// A square on the board, `rank * 8 + file`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

macro_rules! rank_of_squares {
    (@file $rank:expr, $file:expr;) => {};
    (@file $rank:expr, $file:expr; $name:ident $(, $rest:ident)*) => {
        pub const $name: Square = Square($rank * 8 + $file);
        rank_of_squares!(@file $rank, $file + 1; $($rest),*);
    };
    ($rank:expr; $($name:ident),+ $(,)?) => {
        rank_of_squares!(@file $rank, 0; $($name),+);
    };
}

impl Square {
    pub const COUNT: usize = 64;

    rank_of_squares!(0; A1, B1, C1, D1, E1, F1, G1, H1);
    rank_of_squares!(1; A2, B2, C2, D2, E2, F2, G2, H2);
    rank_of_squares!(2; A3, B3, C3, D3, E3, F3, G3, H3);
    rank_of_squares!(3; A4, B4, C4, D4, E4, F4, G4, H4);
    rank_of_squares!(4; A5, B5, C5, D5, E5, F5, G5, H5);
    rank_of_squares!(5; A6, B6, C6, D6, E6, F6, G6, H6);
    rank_of_squares!(6; A7, B7, C7, D7, E7, F7, G7, H7);
    rank_of_squares!(7; A8, B8, C8, D8, E8, F8, G8, H8);

    /// Square from 0-based file and rank, `None` when off the board.
    #[inline]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// # Panics
    ///
    /// Debug-asserts that `index < 64`.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!(index < 64);
        Square(index)
    }

    /// Parse algebraic notation such as `"e4"`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let &[file, rank] = s.as_bytes() else {
            return None;
        };
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Square::from_coords(file - b'a', rank - b'1')
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Step by a file/rank delta, `None` if the step leaves the board.
    #[inline]
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Square> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        if file < 0 || rank < 0 {
            return None;
        }
        Square::from_coords(file as u8, rank as u8)
    }

    /// Iterate over all 64 squares, A1 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
