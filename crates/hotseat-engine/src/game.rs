//! Turn order and game status tracking.
//!
//! The [`Game`] struct owns the board and advances the state machine:
//! - moves are validated in full before the board is touched
//! - the active side flips after every accepted move
//! - the status is recomputed for the new side to move
//! - checkmate and stalemate are terminal

use crate::validator::{castling_rook, is_legal, status_after_move, GameStatus};
use crate::Board;
use hotseat_core::{Piece, Side, Square};
use thiserror::Error;
use tracing::{debug, info};

/// A move that has been committed to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    /// The piece as it stood before moving.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// The piece removed from `to`, if any.
    pub captured: Option<Piece>,
    /// Rook relocation for castling moves.
    pub castle: Option<(Square, Square)>,
}

/// Error type for game operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended.
    #[error("game is over: {0}")]
    GameOver(GameStatus),
    /// There is no piece on the source square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
    /// The source square holds a piece of the side not to move.
    #[error("the piece on {square} belongs to {owner}")]
    NotYourPiece { square: Square, owner: Side },
    /// The move breaks the movement rules or leaves the king in check.
    #[error("illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },
}

/// A two-player game: the board, whose turn it is, and the current status.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    active_side: Side,
    status: GameStatus,
    history: Vec<PlayedMove>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the opening layout with White to move.
    pub fn new() -> Self {
        Game {
            board: Board::initial(),
            active_side: Side::White,
            status: GameStatus::Ongoing,
            history: Vec::new(),
        }
    }

    /// Creates a game from an arbitrary board.
    ///
    /// The status is classified immediately, so a game may start finished.
    pub fn from_board(board: Board, active_side: Side) -> Self {
        let status = status_after_move(&board, active_side);
        Game {
            board,
            active_side,
            status,
            history: Vec::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn active_side(&self) -> Side {
        self.active_side
    }

    /// Returns the status of the side to move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once checkmate or stalemate is reached.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the side that delivered checkmate, if any.
    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Checkmate => Some(self.active_side.opposite()),
            _ => None,
        }
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Returns the most recent move.
    pub fn last_move(&self) -> Option<&PlayedMove> {
        self.history.last()
    }

    /// Returns true if the active side may move from `start` to `end`.
    pub fn is_legal(&self, start: Square, end: Square) -> bool {
        !self.is_over() && is_legal(&self.board, self.active_side, start, end)
    }

    /// Returns the legal destinations of the active side's piece on `start`.
    pub fn legal_destinations(&self, start: Square) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        crate::validator::legal_destinations(&self.board, self.active_side, start)
    }

    /// Validates and commits a move, returning the new status.
    ///
    /// A rejected move leaves the game untouched.
    pub fn make_move(&mut self, start: Square, end: Square) -> Result<GameStatus, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver(self.status));
        }

        let piece = self
            .board
            .piece_at(start)
            .ok_or(GameError::EmptySquare(start))?;
        if piece.side != self.active_side {
            return Err(GameError::NotYourPiece {
                square: start,
                owner: piece.side,
            });
        }
        if !is_legal(&self.board, self.active_side, start, end) {
            debug!(side = %self.active_side, %start, %end, "rejected move");
            return Err(GameError::IllegalMove {
                from: start,
                to: end,
            });
        }

        let castle = castling_rook(&self.board, start, end);
        self.apply_move(piece, start, end, castle);
        Ok(self.status)
    }

    /// Commits a validated move.
    fn apply_move(&mut self, piece: Piece, from: Square, to: Square, castle: Option<(Square, Square)>) {
        let mut board = self.board.clone();
        let captured = board
            .move_piece(from, to)
            .expect("validated move has a piece on its source square");
        if let Some((rook_from, rook_to)) = castle {
            board
                .move_piece(rook_from, rook_to)
                .expect("validated castling has a rook on its corner square");
        }
        self.board = board;

        self.history.push(PlayedMove {
            piece,
            from,
            to,
            captured,
            castle,
        });

        self.active_side = self.active_side.opposite();
        self.status = status_after_move(&self.board, self.active_side);

        debug!(
            piece = %piece.kind,
            %from,
            %to,
            captured = captured.is_some(),
            castled = castle.is_some(),
            status = %self.status,
            "move committed"
        );
        if self.is_over() {
            info!(status = %self.status, side_to_move = %self.active_side, "game over");
        }
    }
}
