//! Tic-Tac-Toe game implementation

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;

pub use board::{Action, Board, Cell, Player};
pub use game::{Game, Outcome};
pub use game_tree::{format_board, reachable_boards};
pub use lines::{LineAnalyzer, WINNING_LINES};
