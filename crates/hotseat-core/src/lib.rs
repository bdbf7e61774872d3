//! Core types for hotseat chess.
//!
//! This crate provides the value types shared by the engine and front ends:
//! - [`Side`] for the two players
//! - [`PieceKind`] and [`Piece`], including per-piece movement shapes
//! - [`Square`] for bounded board coordinates

mod piece;
mod side;
mod square;

pub use piece::{Piece, PieceKind};
pub use side::Side;
pub use square::{ParseSquareError, Square};
