//! Rules engine for two-player chess.
//!
//! This crate provides:
//! - [`Board`] - the 8x8 grid of pieces and its mechanics
//! - [`validator`] - move legality, check detection and status classification
//! - [`Game`] - turn order and status as a state machine
//! - [`Session`] - click-driven selection for front ends
//!
//! # Example
//!
//! ```
//! use hotseat_core::{Side, Square};
//! use hotseat_engine::{Game, GameStatus};
//!
//! let mut game = Game::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! assert_eq!(game.legal_destinations(e2).len(), 2);
//! assert_eq!(game.make_move(e2, e4), Ok(GameStatus::Ongoing));
//! assert_eq!(game.active_side(), Side::Black);
//! ```

mod board;
mod game;
mod session;
pub mod validator;

pub use board::{Board, BoardError};
pub use game::{Game, GameError, PlayedMove};
pub use session::{InputEvent, Outcome, Selection, Session};
pub use validator::{
    attacks, castling_rook, has_legal_move, in_check, is_legal, is_square_attacked,
    legal_destinations, legal_moves, status_after_move, GameStatus,
};
