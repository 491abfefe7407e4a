//! Strategy port - abstraction over anything that chooses moves
//!
//! Implementations include the minimax engine and a uniformly random
//! baseline; both live in [`crate::pipeline`].

use crate::{
    Result,
    tictactoe::{Action, Board},
};

/// A source of moves for one side of a game
pub trait Strategy {
    /// Choose an action for the player to move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] if the board is terminal.
    fn select_move(&mut self, board: &Board) -> Result<Action>;

    /// Name used in reports and logs.
    fn name(&self) -> &str;

    /// Seed the strategy's internal random number generator.
    ///
    /// Deterministic strategies ignore the seed.
    fn set_rng_seed(&mut self, _seed: u64) {}
}
