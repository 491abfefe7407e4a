//! Enumeration of the positions reachable through legal play

use std::collections::{HashSet, VecDeque};

use super::board::Board;

/// Every distinct board reachable from the empty board, terminal ones included.
///
/// Boards are returned in breadth-first order, so they come grouped by the
/// number of marks placed.
pub fn reachable_boards() -> Vec<Board> {
    let root = Board::new();
    let mut visited = HashSet::from([root]);
    let mut queue = VecDeque::from([root]);
    let mut boards = Vec::new();

    while let Some(board) = queue.pop_front() {
        boards.push(board);

        if board.is_terminal() {
            continue;
        }

        for action in board.available_actions() {
            let Ok(next) = board.apply_move(action) else {
                continue;
            };
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    boards
}

/// Render a board on one line as "XXX / OO. / ..."
pub fn format_board(board: &Board) -> String {
    let chars: Vec<char> = board.encode().chars().collect();
    format!(
        "{}{}{} / {}{}{} / {}{}{}",
        chars[0], chars[1], chars[2], chars[3], chars[4], chars[5], chars[6], chars[7], chars[8]
    )
}
