use crate::games::SessionRng;
use super::board::Board;
use super::minimax::best_move;
use super::types::{Difficulty, MoveError};

/// Probability that the medium bot plays a random cell instead of the optimal one.
pub const MEDIUM_RANDOM_MOVE_CHANCE: f64 = 0.5;

/// Cell the bot (always O) plays next on `board`.
pub fn calculate_move(
    difficulty: Difficulty,
    board: &Board,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(MoveError::NoLegalMove);
    }

    let chosen = match difficulty {
        Difficulty::Easy => rng.choose(&available_moves),
        Difficulty::Medium => {
            if rng.random::<f64>() < MEDIUM_RANDOM_MOVE_CHANCE {
                rng.choose(&available_moves)
            } else {
                best_move(board)
            }
        }
        Difficulty::Hard => best_move(board),
    };

    chosen.ok_or(MoveError::NoLegalMove)
}
