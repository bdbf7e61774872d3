//! Move legality, attack detection and game status classification.
//!
//! Legality is layered:
//! 1. the mover must be a piece of the active side and may not land on its own piece
//! 2. the displacement must match the piece's movement shape
//! 3. lines between start and end must be empty (knights jump)
//! 4. the move must not leave the mover's king attacked
//!
//! Castling is the one king move outside the king's shape and is checked
//! separately, including rook state, empty squares and attacked squares.
//!
//! Everything here is a pure function of the board. Enumeration helpers scan
//! all 64 destinations, which is cheap at human interaction rates.

use crate::Board;
use hotseat_core::{PieceKind, Side, Square};
use std::fmt;

/// Status of the side about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    Ongoing,
    /// In check, with at least one legal move.
    Check,
    /// In check, with no legal move.
    Checkmate,
    /// Not in check, with no legal move.
    Stalemate,
}

impl GameStatus {
    /// Returns true if no further moves are accepted.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Ongoing => "Ongoing",
            GameStatus::Check => "Check",
            GameStatus::Checkmate => "Checkmate",
            GameStatus::Stalemate => "Stalemate",
        };
        write!(f, "{}", name)
    }
}

/// Returns true if every square strictly between `start` and `end` is empty.
///
/// Displacements that are not along a rank, file or diagonal have no
/// intervening squares.
fn path_clear(board: &Board, start: Square, end: Square) -> bool {
    let d_row = end.row() as i8 - start.row() as i8;
    let d_col = end.col() as i8 - start.col() as i8;
    if !(d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs()) {
        return true;
    }

    let (step_row, step_col) = (d_row.signum(), d_col.signum());
    let mut next = start.offset(step_row, step_col);
    while let Some(sq) = next {
        if sq == end {
            return true;
        }
        if board.is_occupied(sq) {
            return false;
        }
        next = sq.offset(step_row, step_col);
    }
    true
}

/// Returns true if the piece on `from` could reach `to` by shape and path.
///
/// King safety and the occupant of `to` are not considered.
pub fn attacks(board: &Board, from: Square, to: Square) -> bool {
    match board.piece_at(from) {
        Some(piece) => piece.is_pseudo_legal_shape(from, to) && path_clear(board, from, to),
        None => false,
    }
}

/// Returns true if any piece of `by_side` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, by_side: Side) -> bool {
    board
        .pieces(by_side)
        .any(|(from, _)| attacks(board, from, square))
}

/// Returns true if `side`'s king is attacked.
///
/// A side without a king on the board is never in check.
pub fn in_check(board: &Board, side: Side) -> bool {
    board
        .king_square(side)
        .is_some_and(|king| is_square_attacked(board, king, side.opposite()))
}

/// Checks castling conditions for the king on `start` stepping to `end`.
///
/// On success returns the rook's origin and destination.
fn castling(board: &Board, start: Square, end: Square) -> Option<(Square, Square)> {
    let king = board.piece_at(start)?;
    let side = king.side;
    if !king.can_castle(start.col(), end.col())
        || start.row() != end.row()
        || start.row() != side.back_rank()
    {
        return None;
    }

    let dir: i8 = if end.col() > start.col() { 1 } else { -1 };
    let rook_from = Square::new(start.row(), if dir > 0 { 7 } else { 0 })?;
    let rook = board.piece_at(rook_from)?;
    if rook.kind != PieceKind::Rook || rook.side != side || rook.has_moved {
        return None;
    }

    let mut sq = start.offset(0, dir)?;
    while sq != rook_from {
        if board.is_occupied(sq) {
            return None;
        }
        sq = sq.offset(0, dir)?;
    }

    let crossed = start.offset(0, dir)?;
    let enemy = side.opposite();
    if [start, crossed, end]
        .into_iter()
        .any(|sq| is_square_attacked(board, sq, enemy))
    {
        return None;
    }

    Some((rook_from, crossed))
}

/// Returns the rook's origin and destination if `start` to `end` is a legal
/// castling move.
pub fn castling_rook(board: &Board, start: Square, end: Square) -> Option<(Square, Square)> {
    let king = board.piece_at(start)?;
    if is_legal(board, king.side, start, end) {
        castling(board, start, end)
    } else {
        None
    }
}

/// Plays the move on a scratch copy and reports whether `side`'s king is attacked.
fn leaves_king_in_check(
    board: &Board,
    side: Side,
    start: Square,
    end: Square,
    rook: Option<(Square, Square)>,
) -> bool {
    let mut after = board.clone();
    if after.move_piece(start, end).is_err() {
        return true;
    }
    if let Some((rook_from, rook_to)) = rook {
        if after.move_piece(rook_from, rook_to).is_err() {
            return true;
        }
    }
    in_check(&after, side)
}

/// Returns true if `active_side` may move the piece on `start` to `end`.
pub fn is_legal(board: &Board, active_side: Side, start: Square, end: Square) -> bool {
    let Some(piece) = board.piece_at(start) else {
        return false;
    };
    if piece.side != active_side {
        return false;
    }
    if board.piece_at(end).is_some_and(|target| target.side == active_side) {
        return false;
    }

    if piece.can_castle(start.col(), end.col()) && start.row() == end.row() {
        return castling(board, start, end)
            .is_some_and(|rook| !leaves_king_in_check(board, active_side, start, end, Some(rook)));
    }

    piece.is_pseudo_legal_shape(start, end)
        && path_clear(board, start, end)
        && !leaves_king_in_check(board, active_side, start, end, None)
}

/// Returns every square the piece on `start` may legally move to, in row-major order.
///
/// Empty when `start` is empty or holds an opposing piece.
pub fn legal_destinations(board: &Board, active_side: Side, start: Square) -> Vec<Square> {
    Square::all()
        .filter(|&end| is_legal(board, active_side, start, end))
        .collect()
}

/// Returns every legal `(start, end)` pair for `side`.
pub fn legal_moves(board: &Board, side: Side) -> Vec<(Square, Square)> {
    board
        .pieces(side)
        .flat_map(|(start, _)| {
            legal_destinations(board, side, start)
                .into_iter()
                .map(move |end| (start, end))
        })
        .collect()
}

/// Returns true if `side` has at least one legal move.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board
        .pieces(side)
        .any(|(start, _)| Square::all().any(|end| is_legal(board, side, start, end)))
}

/// Classifies the position for the side about to move.
pub fn status_after_move(board: &Board, side_to_move: Side) -> GameStatus {
    match (in_check(board, side_to_move), has_legal_move(board, side_to_move)) {
        (false, true) => GameStatus::Ongoing,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
    }
}
