//! Board squares in 0x88 encoding.

use std::fmt;

/// Mask that is non-zero for every index outside the playable 8x8 area.
pub const OFF_BOARD_MASK: i32 = 0x88;

/// Number of cells in the 0x88 board array.
pub const BOARD_CELLS: usize = 128;

/// Return `true` if `index` addresses a playable cell of the 0x88 array.
///
/// Negative indices and indices past the array are off-board as well.
#[inline]
pub const fn is_on_board(index: i32) -> bool {
    index >= 0 && index < BOARD_CELLS as i32 && index & OFF_BOARD_MASK == 0
}

/// A playable square, stored as its packed 0x88 index `row * 16 + col`.
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1; column 0 is file A.
/// So A1 = 0x70, D2 = 0x63, E8 = 0x04.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Total number of playable squares.
    pub const COUNT: usize = 64;

    /// Create a square from a packed index, returning `None` for frontier or out-of-range indices.
    #[inline]
    pub const fn from_index(index: i32) -> Option<Square> {
        if is_on_board(index) {
            Some(Square(index as u8))
        } else {
            None
        }
    }

    /// Create a square from a row and a column, both `0..8`.
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square(row * 16 + col))
        } else {
            None
        }
    }

    /// Parse a two-character coordinate such as `"D2"` (case-insensitive).
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let &[file, rank] = s.as_bytes() else {
            return None;
        };
        let file = file.to_ascii_uppercase();
        if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Square::from_row_col(b'8' - rank, file - b'A')
    }

    /// Return the packed 0x88 index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the row (0 = rank 8, 7 = rank 1).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 >> 4
    }

    /// Return the column (0 = file A, 7 = file H).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 & 0x07
    }

    /// Return the file letter, `'A'..='H'`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'A' + self.col()) as char
    }

    /// Return the rank digit, `'1'..='8'`.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row()) as char
    }

    /// Step by a packed displacement, returning `None` if the result leaves the board.
    #[inline]
    pub const fn offset(self, delta: i8) -> Option<Square> {
        Square::from_index(self.0 as i32 + delta as i32)
    }

    /// Iterate over all 64 squares in ascending index order (A8, B8, ..., H1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..BOARD_CELLS as u8)
            .filter(|&i| i & 0x88 == 0)
            .map(Square)
    }

    pub const A1: Square = Square(0x70);
    pub const B1: Square = Square(0x71);
    pub const C1: Square = Square(0x72);
    pub const D1: Square = Square(0x73);
    pub const E1: Square = Square(0x74);
    pub const F1: Square = Square(0x75);
    pub const G1: Square = Square(0x76);
    pub const H1: Square = Square(0x77);
    pub const A2: Square = Square(0x60);
    pub const B2: Square = Square(0x61);
    pub const C2: Square = Square(0x62);
    pub const D2: Square = Square(0x63);
    pub const E2: Square = Square(0x64);
    pub const F2: Square = Square(0x65);
    pub const G2: Square = Square(0x66);
    pub const H2: Square = Square(0x67);
    pub const A3: Square = Square(0x50);
    pub const B3: Square = Square(0x51);
    pub const C3: Square = Square(0x52);
    pub const D3: Square = Square(0x53);
    pub const E3: Square = Square(0x54);
    pub const F3: Square = Square(0x55);
    pub const G3: Square = Square(0x56);
    pub const H3: Square = Square(0x57);
    pub const A4: Square = Square(0x40);
    pub const B4: Square = Square(0x41);
    pub const C4: Square = Square(0x42);
    pub const D4: Square = Square(0x43);
    pub const E4: Square = Square(0x44);
    pub const F4: Square = Square(0x45);
    pub const G4: Square = Square(0x46);
    pub const H4: Square = Square(0x47);
    pub const A5: Square = Square(0x30);
    pub const B5: Square = Square(0x31);
    pub const C5: Square = Square(0x32);
    pub const D5: Square = Square(0x33);
    pub const E5: Square = Square(0x34);
    pub const F5: Square = Square(0x35);
    pub const G5: Square = Square(0x36);
    pub const H5: Square = Square(0x37);
    pub const A6: Square = Square(0x20);
    pub const B6: Square = Square(0x21);
    pub const C6: Square = Square(0x22);
    pub const D6: Square = Square(0x23);
    pub const E6: Square = Square(0x24);
    pub const F6: Square = Square(0x25);
    pub const G6: Square = Square(0x26);
    pub const H6: Square = Square(0x27);
    pub const A7: Square = Square(0x10);
    pub const B7: Square = Square(0x11);
    pub const C7: Square = Square(0x12);
    pub const D7: Square = Square(0x13);
    pub const E7: Square = Square(0x14);
    pub const F7: Square = Square(0x15);
    pub const G7: Square = Square(0x16);
    pub const H7: Square = Square(0x17);
    pub const A8: Square = Square(0x00);
    pub const B8: Square = Square(0x01);
    pub const C8: Square = Square(0x02);
    pub const D8: Square = Square(0x03);
    pub const E8: Square = Square(0x04);
    pub const F8: Square = Square(0x05);
    pub const G8: Square = Square(0x06);
    pub const H8: Square = Square(0x07);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({self})")
    }
}
