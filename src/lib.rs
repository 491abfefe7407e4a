//! Perfect-play Tic-Tac-Toe
//!
//! This crate provides:
//! - An immutable board model with move application and outcome detection
//! - Exhaustive minimax search for the optimal move
//! - Strategies and game runners built on a common [`ports::Strategy`] trait
//! - Command-line tooling for querying and solving positions
//!
//! ```
//! use tictactoe::{minimax, tictactoe::Board};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! let action = minimax::optimal_move(&board).unwrap();
//! let next = board.apply_move(action).unwrap();
//! assert_eq!(next.utility(), 1);
//! ```

pub mod cli;
pub mod error;
pub mod minimax;
pub mod pipeline;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
pub use minimax::{Minimax, TieBreak, optimal_move};
pub use tictactoe::{Action, Board, Cell, Outcome, Player};
