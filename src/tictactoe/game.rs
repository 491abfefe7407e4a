//! High-level game management

use serde::{Deserialize, Serialize};

use super::board::{Action, Board, Player};
use crate::error::Result;

/// Outcome of a position, derived from the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

impl Outcome {
    pub fn is_finished(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// A single game held in memory: its starting board and the actions played
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Action>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Create a game that starts from an arbitrary position
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
        }
    }

    /// Play an action for whoever is to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] if the action is illegal on the
    /// current board. Actions played after the game ended are ignored.
    pub fn play(&mut self, action: Action) -> Result<Board> {
        let current = self.current_board()?;
        if current.is_terminal() {
            return Ok(current);
        }
        let next = current.apply_move(action)?;
        self.moves.push(action);
        Ok(next)
    }

    /// Board after every recorded action
    pub fn current_board(&self) -> Result<Board> {
        self.moves
            .iter()
            .try_fold(self.initial, |board, &action| board.apply_move(action))
    }

    /// The sequence of boards from the initial position to the current one
    pub fn boards(&self) -> Result<Vec<Board>> {
        let mut boards = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        boards.push(board);
        for &action in &self.moves {
            board = board.apply_move(action)?;
            boards.push(board);
        }
        Ok(boards)
    }

    pub fn outcome(&self) -> Result<Outcome> {
        Ok(self.current_board()?.outcome())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_records_moves() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        game.play(Action::new(0, 0)).unwrap();

        assert_eq!(game.moves.len(), 2);
        let boards = game.boards().unwrap();
        assert_eq!(boards.len(), 3);
        assert_eq!(boards[0], Board::new());
        assert_eq!(boards[2].occupied_count(), 2);
        assert_eq!(game.outcome().unwrap(), Outcome::InProgress);
    }

    #[test]
    fn test_illegal_move_is_not_recorded() {
        let mut game = Game::new();
        game.play(Action::new(0, 0)).unwrap();
        assert!(game.play(Action::new(0, 0)).is_err());
        assert_eq!(game.moves.len(), 1);
    }

    #[test]
    fn test_moves_after_finish_are_ignored() {
        let mut game = Game::new();
        for idx in [0, 3, 1, 4, 2] {
            game.play(Action::from_index(idx)).unwrap();
        }
        assert_eq!(game.outcome().unwrap(), Outcome::Win(Player::X));
        assert!(game.outcome().unwrap().is_finished());

        game.play(Action::new(2, 2)).unwrap();
        assert_eq!(game.moves.len(), 5);
    }
}
