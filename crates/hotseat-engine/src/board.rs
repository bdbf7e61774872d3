//! Board occupancy and piece mechanics.

use hotseat_core::{Piece, PieceKind, Side, Square};
use std::fmt;
use thiserror::Error;

/// Errors raised by board mechanics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("no piece on {0}")]
    EmptySquare(Square),
}

/// An 8x8 grid of optional occupants.
///
/// The board performs no legality checks: callers validate moves first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates a board in the standard opening layout.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        board.setup_initial_position();
        board
    }

    /// Returns the occupant of a square.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    /// Returns true if a piece stands on the square.
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// Writes a piece onto a square, replacing any occupant.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.squares[square.index() as usize] = Some(piece);
    }

    /// Removes and returns the occupant of a square.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize].take()
    }

    /// Moves the occupant of `start` to `end`, capturing whatever stood there.
    ///
    /// The moved piece is marked as having moved. Returns the captured piece.
    pub fn move_piece(&mut self, start: Square, end: Square) -> Result<Option<Piece>, BoardError> {
        let mut piece = self.remove(start).ok_or(BoardError::EmptySquare(start))?;
        piece.has_moved = true;
        let captured = self.remove(end);
        self.place(end, piece);
        Ok(captured)
    }

    /// Clears the board and places the opening layout.
    ///
    /// Officers go on each side's back rank in the order R N B Q K B N R,
    /// pawns on the adjacent row.
    pub fn setup_initial_position(&mut self) {
        self.squares = [None; 64];
        for side in Side::BOTH {
            for (col, kind) in PieceKind::BACK_RANK_ORDER.into_iter().enumerate() {
                let col = col as u8;
                if let Some(sq) = Square::new(side.back_rank(), col) {
                    self.place(sq, Piece::new(kind, side));
                }
                if let Some(sq) = Square::new(side.pawn_rank(), col) {
                    self.place(sq, Piece::new(PieceKind::Pawn, side));
                }
            }
        }
    }

    /// Iterates over every occupied square.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Iterates over the pieces of one side.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupants().filter(move |(_, p)| p.side == side)
    }

    /// Returns the square of `side`'s king, if it is on the board.
    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces(side)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..8 {
                let c = Square::new(row, col)
                    .and_then(|sq| self.piece_at(sq))
                    .map_or('.', |p| p.symbol());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn initial_layout_matches_canonical_opening() {
        let board = Board::initial();

        for side in Side::BOTH {
            for col in 0..8u8 {
                let officer = board.piece_at(sq(side.back_rank(), col)).unwrap();
                assert_eq!(officer.kind, PieceKind::BACK_RANK_ORDER[col as usize]);
                assert_eq!(officer.side, side);
                assert!(!officer.has_moved);

                let pawn = board.piece_at(sq(side.pawn_rank(), col)).unwrap();
                assert_eq!(pawn, Piece::new(PieceKind::Pawn, side));
            }
        }

        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.piece_at(sq(row, col)), None);
            }
        }

        assert_eq!(board.occupants().count(), 32);
        assert_eq!(board.pieces(Side::White).count(), 16);
        assert_eq!(board.king_square(Side::White), Some(sq(0, 4)));
        assert_eq!(board.king_square(Side::Black), Some(sq(7, 4)));
    }

    #[test]
    fn setup_resets_a_dirty_board() {
        let mut board = Board::empty();
        board.place(sq(4, 4), Piece::new(PieceKind::Queen, Side::Black));
        board.setup_initial_position();
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn move_piece_relocates_and_marks_moved() {
        let mut board = Board::initial();
        let captured = board.move_piece(sq(1, 2), sq(3, 2)).unwrap();
        assert_eq!(captured, None);
        assert_eq!(board.piece_at(sq(1, 2)), None);

        let pawn = board.piece_at(sq(3, 2)).unwrap();
        assert_eq!(pawn.kind, PieceKind::Pawn);
        assert!(pawn.has_moved);
    }

    #[test]
    fn move_piece_captures_occupant() {
        let mut board = Board::empty();
        board.place(sq(0, 0), Piece::new(PieceKind::Rook, Side::White));
        board.place(sq(5, 0), Piece::new(PieceKind::Knight, Side::Black));

        let captured = board.move_piece(sq(0, 0), sq(5, 0)).unwrap();
        assert_eq!(captured, Some(Piece::new(PieceKind::Knight, Side::Black)));
        assert_eq!(board.occupants().count(), 1);
        assert_eq!(board.piece_at(sq(5, 0)).unwrap().side, Side::White);
    }

    #[test]
    fn move_piece_from_empty_square_is_an_error() {
        let mut board = Board::initial();
        let before = board.clone();
        assert_eq!(
            board.move_piece(sq(3, 3), sq(4, 3)),
            Err(BoardError::EmptySquare(sq(3, 3)))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn display_diagram() {
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[6], "2  P P P P P P P P");
        assert_eq!(lines[4], "4  . . . . . . . .");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
