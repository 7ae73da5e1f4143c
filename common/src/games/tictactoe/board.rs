use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::Mark;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// A 3x3 board stored row-major. Cell `i` sits at row `i / 3`, column `i % 3`.
///
/// The board is a plain value: placing a mark produces a new board, so a search can hand
/// each branch its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Mark>", into = "Vec<Mark>")]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        next.cells[index] = mark;
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Mark>> for Board {
    type Error = String;

    fn try_from(cells: Vec<Mark>) -> Result<Self, Self::Error> {
        let len = cells.len();
        let cells: [Mark; CELL_COUNT] = cells
            .try_into()
            .map_err(|_| format!("board must have exactly {} cells, got {}", CELL_COUNT, len))?;
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Mark> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const X: Mark = Mark::X;
    const O: Mark = Mark::O;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_ascending() {
        let board = Board::from_cells([
            X, E, O,
            E, X, E,
            O, E, E,
        ]);
        assert_eq!(board.available_moves(), vec![1, 3, 5, 7, 8]);
    }

    #[test]
    fn test_is_full() {
        let full = Board::from_cells([
            X, O, X,
            X, O, O,
            O, X, X,
        ]);
        assert!(full.is_full());
        assert!(full.available_moves().is_empty());

        let one_left = full.with_mark(4, E);
        assert!(!one_left.is_full());
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, X);
        assert_eq!(board.cell(4), E);
        assert_eq!(next.cell(4), X);
    }

    #[test]
    fn test_deserialize_wire_board() {
        let board: Board =
            serde_json::from_str(r#"["O","O"," ","X","X"," "," "," "," "]"#).unwrap();
        assert_eq!(board.cell(0), O);
        assert_eq!(board.cell(3), X);
        assert_eq!(board.available_moves(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_deserialize_rejects_wrong_length() {
        let err = serde_json::from_str::<Board>(r#"[" "," "," "]"#).unwrap_err();
        assert!(err.to_string().contains("exactly 9 cells"));

        assert!(serde_json::from_str::<Board>(r#"[]"#).is_err());
        assert!(serde_json::from_str::<Board>(&format!("[{}]", vec![r#"" ""#; 10].join(","))).is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::from_cells([
            X, E, O,
            E, X, E,
            O, E, E,
        ]);
        assert_eq!(board.to_string(), "X_O/_X_/O__");
    }
}
