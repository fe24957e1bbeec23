//! Move legality and game-state engine for two-player chess.
//!
//! This crate provides:
//! - [`Board`] - the 8×8 grid of pieces plus per-color [`Player`] state
//! - [`rules`] - geometric movement predicates for each piece kind
//! - [`is_legal_move`] - full legality of a single move on a board
//! - [`update_in_check`] / [`king_has_valid_moves`] - check and checkmate detection
//! - [`apply_move`] - board mutation reporting whether the game ended
//! - [`Game`] - turn order and the between-move rules a front end enforces
//!
//! Coordinates are `(row, column)` pairs with row 0 on Black's side.
//!
//! # Example
//!
//! ```
//! use chess_core::Coordinate;
//! use chess_engine::{apply_move, is_legal_move, Board, MoveOutcome};
//!
//! let mut board = Board::new();
//! let (from, to) = (Coordinate::new(6, 4), Coordinate::new(4, 4));
//! let pawn = board.piece_at(from).unwrap();
//!
//! assert!(is_legal_move(&pawn, &board, from, to).unwrap());
//! assert_eq!(apply_move(&mut board, from, to).unwrap(), MoveOutcome::Continue);
//! ```

mod board;
mod check;
mod game;
mod mutate;
pub mod path;
mod player;
pub mod rules;
mod validate;

pub use board::Board;
pub use check::{find_king_attacker, is_checkmated, king_has_valid_moves, update_in_check};
pub use game::{EndReason, Game, GameError, GameMove, GameResult};
pub use mutate::{apply_move, MoveOutcome};
pub use player::Player;
pub use validate::is_legal_move;
