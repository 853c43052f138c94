use super::error::GameError;
use super::types::{CELL_COUNT, GameStatus, Mark, WinningLine};
use super::win_detector::{check_win, check_win_with_line};

/// Nine cells in row-major order. Plain value: copying it is the way to
/// explore hypothetical positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from raw cells. Any layout is accepted so strategies can
    /// be asked about arbitrary positions.
    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        index < CELL_COUNT && self.cells[index].is_none()
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_none()).collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// X moves whenever the counts are level.
    pub fn next_mark(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn winner(&self) -> Option<Mark> {
        check_win(&self.cells)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.cells)
    }

    pub fn status(&self) -> GameStatus {
        if let Some(mark) = self.winner() {
            GameStatus::Won(mark)
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// The position after `mark` is placed at `index`. Does not check turn
    /// order or game status; callers in the search only feed legal moves.
    pub fn with_move(&self, index: usize, mark: Mark) -> Result<Board, GameError> {
        if index >= CELL_COUNT {
            return Err(GameError::InvalidIndex(index));
        }
        if self.cells[index].is_some() {
            return Err(GameError::CellOccupied(index));
        }
        let mut next = *self;
        next.cells[index] = Some(mark);
        Ok(next)
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Option<Mark> = None;
    const X: Option<Mark> = Some(Mark::X);
    const O: Option<Mark> = Some(Mark::O);

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();

        assert_eq!(board.available_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(board.next_mark(), Mark::X);
        assert_eq!(board.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_from_cells_keeps_any_layout() {
        #[rustfmt::skip]
        let too_many_o = [
            O, O, E,
            E, E, E,
            E, E, E,
        ];
        #[rustfmt::skip]
        let too_many_x = [
            X, X, E,
            E, E, E,
            E, E, E,
        ];

        let board = Board::from_cells(too_many_o);
        assert_eq!(board.count(Mark::O), 2);
        assert_eq!(board.available_moves(), vec![2, 3, 4, 5, 6, 7, 8]);

        let board = Board::from_cells(too_many_x);
        assert_eq!(board.count(Mark::X), 2);
        assert_eq!(board.next_mark(), Mark::O);
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_move(4, Mark::X).unwrap();

        assert_eq!(board.get(4), None);
        assert_eq!(next.get(4), Some(Mark::X));
        assert_eq!(next.next_mark(), Mark::O);
    }

    #[test]
    fn test_with_move_rejects_occupied_and_out_of_range() {
        let board = Board::new().with_move(0, Mark::X).unwrap();

        assert_eq!(board.with_move(0, Mark::O), Err(GameError::CellOccupied(0)));
        assert_eq!(board.with_move(9, Mark::O), Err(GameError::InvalidIndex(9)));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, X,
            X, O, O,
            O, X, X,
        ]);

        assert_eq!(board.status(), GameStatus::Draw);
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        #[rustfmt::skip]
        let board = Board::from_cells([
            X, O, X,
            O, X, O,
            O, X, X,
        ]);

        assert_eq!(board.status(), GameStatus::Won(Mark::X));
    }
}
