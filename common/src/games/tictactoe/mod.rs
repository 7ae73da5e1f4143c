mod board;
mod bot_controller;
mod minimax;
mod types;
mod win_detector;

pub use board::{Board, BOARD_SIDE, CELL_COUNT};
pub use bot_controller::{calculate_move, MEDIUM_RANDOM_MOVE_CHANCE};
pub use minimax::{best_move, minimax, WIN_SCORE};
pub use types::{Difficulty, GameStatus, Mark, MoveError};
pub use win_detector::{check_outcome, is_full, is_winner, WIN_LINES};
