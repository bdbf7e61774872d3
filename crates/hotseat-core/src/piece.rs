//! Chess piece representation and movement shapes.

use crate::{Side, Square};

/// The six types of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Officer order along a back rank, from column 0 to column 7.
    pub const BACK_RANK_ORDER: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Returns true if this piece slides along lines (bishop, rook, or queen).
    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }

    /// Lowercase letter for this kind (`p`, `n`, `b`, `r`, `q`, `k`).
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Lowercase name, as used in asset keys.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// A piece on the board.
///
/// `kind` and `side` never change. `has_moved` flips to true the first time
/// the piece is relocated and gates the pawn double step and castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub has_moved: bool,
}

impl Piece {
    /// Creates a piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece {
            kind,
            side,
            has_moved: false,
        }
    }

    /// Returns whether the displacement from `start` to `end` matches this
    /// piece's movement pattern.
    ///
    /// Occupancy, obstruction and king safety are not considered here. A
    /// zero displacement never matches.
    pub fn is_pseudo_legal_shape(&self, start: Square, end: Square) -> bool {
        let d_row = end.row() as i8 - start.row() as i8;
        let d_col = end.col() as i8 - start.col() as i8;
        if d_row == 0 && d_col == 0 {
            return false;
        }

        let straight = d_row == 0 || d_col == 0;
        let diagonal = d_row.abs() == d_col.abs();

        match self.kind {
            PieceKind::Pawn => {
                let dir = self.side.pawn_direction();
                d_col == 0 && (d_row == dir || (!self.has_moved && d_row == 2 * dir))
            }
            PieceKind::Rook => straight,
            PieceKind::Knight => {
                (d_row.abs() == 2 && d_col.abs() == 1) || (d_row.abs() == 1 && d_col.abs() == 2)
            }
            PieceKind::Bishop => diagonal,
            PieceKind::Queen => straight || diagonal,
            PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        }
    }

    /// Returns true if this is an unmoved king stepping exactly two columns.
    ///
    /// This only gates eligibility. Rook presence, empty squares and attacked
    /// squares are checked by the validator.
    pub fn can_castle(&self, start_col: u8, end_col: u8) -> bool {
        self.kind == PieceKind::King && !self.has_moved && start_col.abs_diff(end_col) == 2
    }

    /// Letter for this piece: uppercase for White, lowercase for Black.
    pub const fn symbol(&self) -> char {
        let c = self.kind.letter();
        match self.side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Unicode chess glyph for this piece.
    pub const fn glyph(&self) -> char {
        match (self.side, self.kind) {
            (Side::White, PieceKind::King) => '\u{2654}',
            (Side::White, PieceKind::Queen) => '\u{2655}',
            (Side::White, PieceKind::Rook) => '\u{2656}',
            (Side::White, PieceKind::Bishop) => '\u{2657}',
            (Side::White, PieceKind::Knight) => '\u{2658}',
            (Side::White, PieceKind::Pawn) => '\u{2659}',
            (Side::Black, PieceKind::King) => '\u{265A}',
            (Side::Black, PieceKind::Queen) => '\u{265B}',
            (Side::Black, PieceKind::Rook) => '\u{265C}',
            (Side::Black, PieceKind::Bishop) => '\u{265D}',
            (Side::Black, PieceKind::Knight) => '\u{265E}',
            (Side::Black, PieceKind::Pawn) => '\u{265F}',
        }
    }

    /// Sprite key for graphical front ends, e.g. `white_pawn`.
    ///
    /// The terminal shell draws letters or glyphs instead and does not use it.
    pub fn asset_key(&self) -> String {
        format!("{}_{}", self.side.name(), self.kind.name())
    }
}
