//! Exhaustive minimax search
//!
//! X maximizes the terminal utility and O minimizes it. Every reachable
//! position below the searched board is visited: there is no pruning and no
//! caching, which keeps each call a pure function of its board. The full tree
//! from the empty board holds roughly half a million nodes, so a search from
//! the opening takes a noticeable fraction of a second in debug builds.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::tictactoe::{Action, Board, Player};

/// Which of several equally valued actions the search reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Both players keep the first best action in row-major order
    #[default]
    FirstWins,
    /// X keeps the first best action, O keeps the last one
    Legacy,
}

/// Minimax search engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    tie_break: TieBreak,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Minimax { tie_break }
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Best action for the player to move, or `None` on a terminal board.
    pub fn optimal_move(&self, board: &Board) -> Option<Action> {
        if board.is_terminal() {
            return None;
        }

        let player = board.current_player();
        let mut best: Option<(Action, i32)> = None;

        for (action, value) in self.action_values(board) {
            let replace = match (best, player) {
                (None, _) => true,
                (Some((_, best_value)), Player::X) => value > best_value,
                (Some((_, best_value)), Player::O) => match self.tie_break {
                    TieBreak::FirstWins => value < best_value,
                    TieBreak::Legacy => value <= best_value,
                },
            };
            if replace {
                best = Some((action, value));
            }
        }

        if let Some((action, value)) = best {
            log::debug!("{player} to move: best action {action} with value {value}");
        }
        best.map(|(action, _)| action)
    }

    /// Every action that reaches the minimax value, in row-major order.
    ///
    /// Empty on a terminal board.
    pub fn optimal_moves(&self, board: &Board) -> Vec<Action> {
        if board.is_terminal() {
            return Vec::new();
        }
        let values = self.action_values(board);
        let target = match board.current_player() {
            Player::X => values.iter().map(|&(_, v)| v).max(),
            Player::O => values.iter().map(|&(_, v)| v).min(),
        };
        values
            .into_iter()
            .filter(|&(_, v)| Some(v) == target)
            .map(|(action, _)| action)
            .collect()
    }

    /// Game value of the board under perfect play, from X's point of view
    pub fn evaluate(&self, board: &Board) -> i32 {
        match board.current_player() {
            Player::X => max_value(board),
            Player::O => min_value(board),
        }
    }

    /// Minimax value of the position reached by each available action.
    pub fn action_values(&self, board: &Board) -> Vec<(Action, i32)> {
        let player = board.current_player();
        board
            .successors()
            .into_iter()
            .map(|(action, next)| {
                let value = match player {
                    Player::X => min_value(&next),
                    Player::O => max_value(&next),
                };
                log::trace!("{player} {action} -> {value}");
                (action, value)
            })
            .collect()
    }
}

/// Best action for the player to move, with first-wins tie breaking
pub fn optimal_move(board: &Board) -> Option<Action> {
    Minimax::new().optimal_move(board)
}

/// Value of a board where X is to move
pub fn max_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }
    board
        .successors()
        .into_iter()
        .map(|(_, next)| min_value(&next))
        .fold(i32::MIN, i32::max)
}

/// Value of a board where O is to move
pub fn min_value(board: &Board) -> i32 {
    if board.is_terminal() {
        return board.utility();
    }
    board
        .successors()
        .into_iter()
        .map(|(_, next)| max_value(&next))
        .fold(i32::MAX, i32::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn terminal_board_has_no_move() {
        assert_eq!(optimal_move(&board("XXX/OO./...")), None);
        assert_eq!(optimal_move(&board("XOX/XOO/OXX")), None);
        assert!(Minimax::new().optimal_moves(&board("XOX/XOO/OXX")).is_empty());
    }

    #[test]
    fn takes_immediate_win() {
        let b = board("XX./OO./...");
        assert_eq!(b.current_player(), Player::X);
        assert_eq!(optimal_move(&b), Some(Action::new(0, 2)));
        assert_eq!(Minimax::new().evaluate(&b), 1);
    }

    #[test]
    fn blocks_opponent_line() {
        // O must take the bottom-left corner to stop the anti-diagonal
        let b = board("O.X/.X./...");
        assert_eq!(b.current_player(), Player::O);
        assert_eq!(optimal_move(&b), Some(Action::new(2, 0)));
        assert_eq!(Minimax::new().evaluate(&b), 0);
    }

    #[test]
    fn values_of_terminal_boards_are_utilities() {
        assert_eq!(max_value(&board("XOX/XOO/OXX")), 0);
        assert_eq!(min_value(&board("XXX/OO./...")), 1);
        assert_eq!(max_value(&board("XOX/.OX/.O.")), -1);
    }

    #[test]
    fn last_move_is_forced() {
        let b = board("XOX/XOO/OX.");
        assert_eq!(optimal_move(&b), Some(Action::new(2, 2)));
        assert_eq!(max_value(&b), 0);
    }

    #[test]
    fn tie_break_selects_first_or_last_equal_action() {
        // Both (0, 2) and (2, 0) hold the draw for O
        let b = board("O../.X./..X");
        assert_eq!(
            Minimax::new().optimal_moves(&b),
            vec![Action::new(0, 2), Action::new(2, 0)]
        );
        assert_eq!(
            Minimax::with_tie_break(TieBreak::FirstWins).optimal_move(&b),
            Some(Action::new(0, 2))
        );
        assert_eq!(
            Minimax::with_tie_break(TieBreak::Legacy).optimal_move(&b),
            Some(Action::new(2, 0))
        );
    }

    #[test]
    fn tie_break_does_not_change_the_maximizer() {
        let b = board("XX./OO./...");
        assert_eq!(
            Minimax::with_tie_break(TieBreak::Legacy).optimal_move(&b),
            Minimax::with_tie_break(TieBreak::FirstWins).optimal_move(&b)
        );
    }

    #[test]
    fn action_values_cover_every_empty_cell() {
        let b = board("O.X/.X./...");
        let values = Minimax::new().action_values(&b);
        assert_eq!(values.len(), 6);
        assert_eq!(
            values.iter().filter(|&&(_, v)| v == 0).count(),
            1,
            "only the block keeps the draw"
        );
    }
}
