//! Board state representation and basic operations

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{game::Outcome, lines::LineAnalyzer};
use crate::error::{Error, Result};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Terminal utility when this player has won
    pub fn utility(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move target, addressed by row and column.
///
/// Actions order row-major, so sets of actions iterate from the top-left
/// cell to the bottom-right one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Build an action from a flat cell index (0-8)
    pub fn from_index(index: usize) -> Self {
        Action {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Flat cell index, or `None` when the action lies off the board
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then_some(self.row * 3 + self.col)
    }
}

impl TryFrom<(i64, i64)> for Action {
    type Error = Error;

    fn try_from((row, col): (i64, i64)) -> Result<Self> {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < 3 && c < 3 => Ok(Action::new(r, c)),
            _ => Err(Error::out_of_range(row, col)),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

/// A 3x3 Tic-Tac-Toe position.
///
/// Boards are plain values: every move returns a fresh board and leaves the
/// one it was applied to untouched. The side to move is never stored; it is
/// recovered from the piece counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create the empty starting board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board from raw cells without checking piece counts
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Cell at the given action, or `None` when the action lies off the board
    pub fn get(&self, action: Action) -> Option<Cell> {
        action.index().map(|idx| self.cells[idx])
    }

    fn count_pieces(cells: &[Cell; 9]) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        9 - Self::count_pieces(&self.cells).empty
    }

    /// Player whose turn it is.
    ///
    /// X moves whenever the counts tie (including the empty board) or O is
    /// somehow ahead; otherwise O moves. The answer carries no meaning once
    /// the board is terminal.
    pub fn current_player(&self) -> Player {
        let count = Self::count_pieces(&self.cells);
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// Every empty cell on the board
    pub fn available_actions(&self) -> BTreeSet<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Board reached by each available action, in row-major order.
    ///
    /// Empty on a terminal board.
    pub fn successors(&self) -> Vec<(Action, Board)> {
        if self.is_terminal() {
            return Vec::new();
        }
        let mark = self.current_player().to_cell();
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(idx, _)| {
                let mut next = *self;
                next.cells[idx] = mark;
                (Action::from_index(idx), next)
            })
            .collect()
    }

    /// Place the current player's mark and return the resulting board.
    ///
    /// A terminal board is returned unchanged whatever the action. On a live
    /// board the action must address an empty cell inside the grid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAction`] when the action lies off the board or
    /// targets an occupied cell.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, action: Action) -> Result<Board> {
        if self.is_terminal() {
            return Ok(*self);
        }

        let idx = action
            .index()
            .ok_or_else(|| Error::off_board(action.row, action.col))?;

        if self.cells[idx] != Cell::Empty {
            return Err(Error::occupied(action.row, action.col));
        }

        let mut next = *self;
        next.cells[idx] = self.current_player().to_cell();
        Ok(next)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        !self.cells.contains(&Cell::Empty) || self.winner().is_some()
    }

    /// Score of a finished game from X's point of view: 1, -1 or 0.
    ///
    /// Only meaningful on terminal boards; a live board scores 0.
    pub fn utility(&self) -> i32 {
        self.winner().map_or(0, Player::utility)
    }

    /// Derived game outcome
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None if self.is_terminal() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Compact nine-character encoding, row by row
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Parse a board from nine cell characters; whitespace and `/` are ignored.
    ///
    /// `.` marks an empty cell, `X`/`x` an X and `O`/`o`/`0` an O.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string has fewer than 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts cannot arise from play (X must equal O or lead by one)
    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if chars.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let count = Self::count_pieces(&cells);
        if count.x != count.o && count.x != count.o + 1 {
            return Err(Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % 3 == 0 && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
