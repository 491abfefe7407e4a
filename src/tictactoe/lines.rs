//! Winning line analysis for Tic-Tac-Toe

use std::collections::BTreeSet;

use super::{Action, Cell, Player};

/// Winning line indices on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 4, 8],
    [2, 4, 6], // diagonals
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Owner of the first complete line, scanning diagonals, then rows, then columns.
    ///
    /// Boards are assumed to hold at most one winning mark.
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        WINNING_LINES.iter().find_map(|line| {
            let first = cells[line[0]].to_player()?;
            line.iter()
                .all(|&idx| cells[idx] == cells[line[0]])
                .then_some(first)
        })
    }

    /// Find all cells that would immediately complete a line for the player
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> BTreeSet<Action> {
        WINNING_LINES
            .iter()
            .filter_map(|line| Self::winning_move_in_line(cells, player, line))
            .map(Action::from_index)
            .collect()
    }

    fn winning_move_in_line(cells: &[Cell; 9], player: Player, line: &[usize; 3]) -> Option<usize> {
        let target = player.to_cell();
        let mut count = 0;
        let mut empty_pos = None;

        for &idx in line {
            match cells[idx] {
                Cell::Empty => {
                    if empty_pos.is_some() {
                        return None;
                    }
                    empty_pos = Some(idx);
                }
                c if c == target => count += 1,
                _ => return None,
            }
        }

        if count == 2 { empty_pos } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_winner() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_column_winner() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        cells[3] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_anti_diagonal() {
        let mut cells = [Cell::Empty; 9];
        cells[2] = Cell::O;
        cells[4] = Cell::O;
        cells[6] = Cell::O;

        assert_eq!(LineAnalyzer::winner(&cells), Some(Player::O));
    }

    #[test]
    fn empty_line_is_not_a_win() {
        assert_eq!(LineAnalyzer::winner(&[Cell::Empty; 9]), None);
    }

    #[test]
    fn test_winning_moves_multiple() {
        // XX.
        // X..
        // ...
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[3] = Cell::X;

        let moves = LineAnalyzer::winning_moves(&cells, Player::X);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Action::new(0, 2)));
        assert!(moves.contains(&Action::new(2, 0)));
        assert!(LineAnalyzer::winning_moves(&cells, Player::O).is_empty());
    }

    #[test]
    fn test_blocked_line_is_not_a_threat() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::O;

        assert!(LineAnalyzer::winning_moves(&cells, Player::X).is_empty());
    }

    #[test]
    fn lines_are_scanned_diagonals_rows_columns() {
        let diagonals = [[0, 4, 8], [2, 4, 6]];
        let rows = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];
        let columns = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];

        assert_eq!(WINNING_LINES[..2], diagonals);
        assert_eq!(WINNING_LINES[2..5], rows);
        assert_eq!(WINNING_LINES[5..], columns);
    }
}
