//! Strategy implementations: the minimax engine and a random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    minimax::{Minimax, TieBreak},
    ports::Strategy,
    tictactoe::{Action, Board},
};

/// Perfect play backed by exhaustive minimax search
#[derive(Debug, Clone)]
pub struct OptimalStrategy {
    name: String,
    engine: Minimax,
}

impl OptimalStrategy {
    pub fn new(name: String) -> Self {
        Self::with_tie_break(name, TieBreak::default())
    }

    pub fn with_tie_break(name: String, tie_break: TieBreak) -> Self {
        Self {
            name,
            engine: Minimax::with_tie_break(tie_break),
        }
    }
}

impl Strategy for OptimalStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Action> {
        self.engine.optimal_move(board).ok_or(Error::GameOver)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Uniformly random choice among the available actions
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    name: String,
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(name: String) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(name: String, seed: u64) -> Self {
        Self {
            name,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board) -> Result<Action> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }
        let actions: Vec<Action> = board.available_actions().into_iter().collect();
        let index = self.rng.random_range(0..actions.len());
        Ok(actions[index])
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }
}
