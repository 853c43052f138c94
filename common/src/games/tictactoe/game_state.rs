use super::board::Board;
use super::error::GameError;
use super::types::{CELL_COUNT, GameStatus, Mark, Move, WinningLine};

/// One game in progress: the board plus the moves that produced it.
///
/// Status is never stored. It is read off the board each time, so it cannot go
/// stale after an undo.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    board: Board,
    history: Vec<Move>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `mark` at `index`. Either the whole move is applied and recorded,
    /// or nothing changes.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<GameStatus, GameError> {
        if self.status().is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let expected = self.current_turn();
        if mark != expected {
            return Err(GameError::OutOfTurn {
                expected,
                got: mark,
            });
        }

        self.board = self.board.with_move(index, mark)?;
        self.history.push(Move::new(index, mark));

        Ok(self.status())
    }

    /// Takes back the most recent move. The removed mark is to move again.
    pub fn undo_last(&mut self) -> Result<Move, GameError> {
        let last = self.history.pop().ok_or(GameError::NoHistory)?;
        self.board.clear(last.index);
        Ok(last)
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.history.clear();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snapshot(&self) -> [Option<Mark>; CELL_COUNT] {
        *self.board.cells()
    }

    pub fn current_turn(&self) -> Mark {
        self.board.next_mark()
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.board.winning_line()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::WINNING_LINES;

    fn play(moves: &[usize]) -> GameState {
        let mut state = GameState::new();
        for &index in moves {
            let mark = state.current_turn();
            state.apply_move(index, mark).unwrap();
        }
        state
    }

    fn for_each_game(state: &mut GameState, visit: &mut dyn FnMut(&GameState)) {
        visit(state);
        if state.status().is_over() {
            return;
        }
        for index in state.board().available_moves() {
            let mark = state.current_turn();
            state.apply_move(index, mark).unwrap();
            for_each_game(state, visit);
            state.undo_last().unwrap();
        }
    }

    #[test]
    fn test_apply_move_alternates_turns() {
        let mut state = GameState::new();

        assert_eq!(state.apply_move(4, Mark::X), Ok(GameStatus::InProgress));
        assert_eq!(state.current_turn(), Mark::O);
        assert_eq!(state.apply_move(0, Mark::O), Ok(GameStatus::InProgress));
        assert_eq!(state.current_turn(), Mark::X);
        assert_eq!(state.history_len(), 2);
        assert_eq!(state.last_move(), Some(Move::new(0, Mark::O)));
    }

    #[test]
    fn test_occupied_cell_is_rejected_without_change() {
        let mut state = play(&[4]);
        let before = *state.board();

        assert_eq!(state.apply_move(4, Mark::O), Err(GameError::CellOccupied(4)));
        assert_eq!(*state.board(), before);
        assert_eq!(state.history_len(), 1);
        assert_eq!(state.current_turn(), Mark::O);
    }

    #[test]
    fn test_invalid_index_is_rejected() {
        let mut state = GameState::new();

        assert_eq!(state.apply_move(9, Mark::X), Err(GameError::InvalidIndex(9)));
        assert_eq!(state.history_len(), 0);
    }

    #[test]
    fn test_out_of_turn_is_rejected() {
        let mut state = GameState::new();

        assert_eq!(
            state.apply_move(0, Mark::O),
            Err(GameError::OutOfTurn {
                expected: Mark::X,
                got: Mark::O
            })
        );
        assert_eq!(state.board().filled(), 0);
    }

    #[test]
    fn test_move_after_win_is_rejected() {
        let mut state = play(&[0, 3, 1, 4, 2]);

        assert_eq!(state.status(), GameStatus::Won(Mark::X));
        assert_eq!(state.apply_move(5, Mark::O), Err(GameError::GameAlreadyOver));
        assert_eq!(state.winning_line().unwrap().cells, [0, 1, 2]);
    }

    #[test]
    fn test_undo_on_empty_history_fails() {
        let mut state = GameState::new();

        assert_eq!(state.undo_last(), Err(GameError::NoHistory));
    }

    #[test]
    fn test_undo_reopens_a_finished_game() {
        let mut state = play(&[0, 3, 1, 4, 2]);

        assert_eq!(state.undo_last(), Ok(Move::new(2, Mark::X)));
        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.current_turn(), Mark::X);
    }

    #[test]
    fn test_reset_clears_board_and_history() {
        let mut state = play(&[0, 3, 1, 4, 2]);
        state.reset();

        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.snapshot(), [None; CELL_COUNT]);
        assert_eq!(state.history_len(), 0);
        assert_eq!(state.current_turn(), Mark::X);
    }

    #[test]
    fn test_undo_restores_every_reachable_position() {
        let mut state = GameState::new();
        let mut checked = 0usize;

        for_each_game(&mut state, &mut |position| {
            if position.status().is_over() {
                return;
            }
            let mut probe = position.clone();
            let before = *probe.board();
            let turn = probe.current_turn();
            for index in before.available_moves() {
                probe.apply_move(index, turn).unwrap();
                probe.undo_last().unwrap();
                assert_eq!(*probe.board(), before);
                assert_eq!(probe.current_turn(), turn);
                checked += 1;
            }
        });

        assert!(checked > 0);
    }

    #[test]
    fn test_status_matches_line_definition_everywhere() {
        let mut state = GameState::new();

        for_each_game(&mut state, &mut |position| {
            let cells = position.snapshot();
            let line_owner = |mark: Mark| {
                WINNING_LINES
                    .iter()
                    .any(|line| line.iter().all(|&i| cells[i] == Some(mark)))
            };
            let full = cells.iter().all(Option::is_some);

            match position.status() {
                GameStatus::Won(mark) => assert!(line_owner(mark)),
                GameStatus::Draw => {
                    assert!(full);
                    assert!(!line_owner(Mark::X) && !line_owner(Mark::O));
                }
                GameStatus::InProgress => {
                    assert!(!full);
                    assert!(!line_owner(Mark::X) && !line_owner(Mark::O));
                }
            }
        });
    }
}
