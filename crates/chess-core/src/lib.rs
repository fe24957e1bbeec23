//! Core types for chess.
//!
//! This crate provides the fundamental types used across the chess engine:
//! - [`Color`] for the two players
//! - [`PieceKind`] and [`Piece`] for square contents
//! - [`Coordinate`] for `(row, column)` board positions
//! - [`OutOfRangeError`] for grid accesses that fall off the board

mod color;
mod coordinate;
mod piece;

pub use color::Color;
pub use coordinate::{Coordinate, OutOfRangeError, BOARD_SIZE};
pub use piece::{Piece, PieceKind};
