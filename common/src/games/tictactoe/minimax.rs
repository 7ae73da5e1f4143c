use super::board::Board;
use super::types::Mark;
use super::win_detector::{is_full, is_winner};

/// Score of a win found at depth 0. Each extra ply costs one point, so quicker wins and
/// slower losses are preferred.
pub const WIN_SCORE: i32 = 10;

/// Value of `board` for O, who maximizes. X minimizes.
///
/// Every branch works on its own copy of the board.
pub fn minimax(board: &Board, mut alpha: i32, mut beta: i32, depth: usize, is_maximizing: bool) -> i32 {
    let depth_score = depth as i32;

    if is_winner(board, Mark::O) {
        return WIN_SCORE - depth_score;
    }
    if is_winner(board, Mark::X) {
        return depth_score - WIN_SCORE;
    }
    if is_full(board) {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in board.available_moves() {
            let eval = minimax(&board.with_mark(index, Mark::O), alpha, beta, depth + 1, false);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in board.available_moves() {
            let eval = minimax(&board.with_mark(index, Mark::X), alpha, beta, depth + 1, true);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

/// Optimal cell for O. Ties go to the lowest index. `None` when the board is full.
pub fn best_move(board: &Board) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in board.available_moves() {
        let score = minimax(&board.with_mark(index, Mark::O), i32::MIN, i32::MAX, 0, false);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}
