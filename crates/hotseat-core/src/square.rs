//! Board square representation.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a square from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("empty square")]
    Empty,

    #[error("invalid square '{0}': expected algebraic (e2) or row,col (1,4)")]
    Malformed(String),

    #[error("square '{0}' is off the board")]
    OutOfRange(String),
}

/// A square on the board, identified by `(row, col)` with both in `0..8`.
///
/// Squares are stored as a row-major index:
/// - (0, 0) = 0, (0, 1) = 1, ..., (0, 7) = 7
/// - (1, 0) = 8, ..., (7, 7) = 63
///
/// The only constructors are checked, so an off-board square cannot exist.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Number of rows and columns.
    pub const SIZE: u8 = 8;

    /// Creates a square from row and column, or `None` if either is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < Self::SIZE && col < Self::SIZE {
            Some(Square(row * Self::SIZE + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Parses a square from algebraic notation (e.g., "e2" is row 1, col 4).
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = bytes[0].to_ascii_lowercase();
        let row = bytes[1];
        if col < b'a' || col > b'h' || row < b'1' || row > b'8' {
            return None;
        }
        Square::new(row - b'1', col - b'a')
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::SIZE
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % Self::SIZE
    }

    /// Returns the square displaced by `(d_row, d_col)`, if it is still on the board.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row() as i8 + d_row;
        let col = self.col() as i8 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Iterates over all 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", (b'a' + self.col()) as char, self.row() + 1)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Accepts algebraic notation (`e2`) or a `row,col` pair (`1,4`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseSquareError::Empty);
        }

        if let Some((row, col)) = s.split_once(',') {
            let row: u8 = row
                .trim()
                .parse()
                .map_err(|_| ParseSquareError::Malformed(s.to_string()))?;
            let col: u8 = col
                .trim()
                .parse()
                .map_err(|_| ParseSquareError::Malformed(s.to_string()))?;
            return Square::new(row, col).ok_or_else(|| ParseSquareError::OutOfRange(s.to_string()));
        }

        let bytes = s.as_bytes();
        if bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1].is_ascii_digit() {
            return Square::from_algebraic(s).ok_or_else(|| ParseSquareError::OutOfRange(s.to_string()));
        }

        Err(ParseSquareError::Malformed(s.to_string()))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let sq = Square::new(3, 4).unwrap();
        assert_eq!(sq.row(), 3);
        assert_eq!(sq.col(), 4);
        assert_eq!(sq.index(), 28);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Square::new(0, 0));
        assert_eq!(Square::from_algebraic("e2"), Square::new(1, 4));
        assert_eq!(Square::from_algebraic("H8"), Square::new(7, 7));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::new(0, 0).unwrap().to_algebraic(), "a1");
        assert_eq!(Square::new(7, 7).unwrap().to_algebraic(), "h8");
        assert_eq!(format!("{:?}", Square::new(1, 2).unwrap()), "Square(c2)");
    }

    #[test]
    fn square_offset() {
        let sq = Square::new(0, 0).unwrap();
        assert_eq!(sq.offset(1, 2), Square::new(1, 2));
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(Square::new(7, 7).unwrap().offset(0, 1), None);
    }

    #[test]
    fn all_squares_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0).unwrap());
        assert_eq!(squares[9], Square::new(1, 1).unwrap());
        assert_eq!(squares[63], Square::new(7, 7).unwrap());
    }

    #[test]
    fn parse_square() {
        assert_eq!("e2".parse::<Square>(), Ok(Square::new(1, 4).unwrap()));
        assert_eq!(" 1, 4 ".parse::<Square>(), Ok(Square::new(1, 4).unwrap()));
        assert_eq!("".parse::<Square>(), Err(ParseSquareError::Empty));
        assert!(matches!(
            "8,0".parse::<Square>(),
            Err(ParseSquareError::OutOfRange(_))
        ));
        assert!(matches!(
            "z9".parse::<Square>(),
            Err(ParseSquareError::OutOfRange(_))
        ));
        assert!(matches!(
            "hello".parse::<Square>(),
            Err(ParseSquareError::Malformed(_))
        ));
    }
}
