use super::board::Board;
use super::types::{GameStatus, Mark};

pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn is_winner(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.cell(index) == mark))
}

pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// O is checked before X so that a (malformed) board where both sides have a line reports
/// the same side the search would score.
pub fn check_outcome(board: &Board) -> GameStatus {
    if is_winner(board, Mark::O) {
        GameStatus::OWon
    } else if is_winner(board, Mark::X) {
        GameStatus::XWon
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
