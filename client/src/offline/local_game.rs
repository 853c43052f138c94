use tictactoe_common::SessionRng;
use tictactoe_common::tictactoe::{
    BotInput, Difficulty, GameError, GameState, GameStatus, Mark, Move, Scoreboard, WinningLine,
    calculate_move,
};

/// Something the presentation layer should announce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    MovePlayed { played: Move, by_computer: bool },
    Won(WinningLine),
    Draw,
    Undone(Vec<Move>),
    Reset,
    DifficultyChanged(Difficulty),
    ScoresCleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum LocalGameError {
    #[display("{}", _0)]
    Game(GameError),

    #[display("The round is over, type 'reset' to play again")]
    RoundOver,

    #[display("Wait for the computer's move")]
    ComputerTurn,

    #[display("It is not the computer's turn")]
    NotComputerTurn,
}

impl std::error::Error for LocalGameError {}

impl From<GameError> for LocalGameError {
    fn from(error: GameError) -> Self {
        LocalGameError::Game(error)
    }
}

/// A single-machine session: one board, the score across rounds, and who
/// controls the computer seat.
///
/// Input is gated by `active` rather than by detaching the input source, so a
/// reset re-opens the board without any extra bookkeeping.
pub struct LocalGame {
    state: GameState,
    scoreboard: Scoreboard,
    difficulty: Difficulty,
    computer_mark: Mark,
    active: bool,
    rng: SessionRng,
}

impl LocalGame {
    pub fn new(difficulty: Difficulty, computer_mark: Mark, rng: SessionRng) -> Self {
        Self {
            state: GameState::new(),
            scoreboard: Scoreboard::new(),
            difficulty,
            computer_mark,
            active: true,
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn computer_mark(&self) -> Mark {
        self.computer_mark
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_computer_turn(&self) -> bool {
        self.is_active()
            && self.difficulty.is_computer()
            && self.state.current_turn() == self.computer_mark
    }

    pub fn play_human(&mut self, index: usize) -> Result<Vec<GameEvent>, LocalGameError> {
        if !self.active {
            return Err(LocalGameError::RoundOver);
        }
        if self.is_computer_turn() {
            return Err(LocalGameError::ComputerTurn);
        }

        let mark = self.state.current_turn();
        self.apply(index, mark, false)
    }

    pub fn play_computer(&mut self) -> Result<Vec<GameEvent>, LocalGameError> {
        if !self.is_computer_turn() {
            return Err(LocalGameError::NotComputerTurn);
        }

        let input = BotInput::from_game_state(&self.state);
        let index = calculate_move(self.difficulty, &input, &mut self.rng)
            .ok_or(LocalGameError::Game(GameError::GameAlreadyOver))?;

        self.apply(index, self.computer_mark, true)
    }

    /// Takes back the last move, and against the computer also its reply, so
    /// the human is to move afterwards. A computer opening on its own is not
    /// undoable, since the computer would just replay it.
    pub fn undo(&mut self) -> Result<Vec<GameEvent>, LocalGameError> {
        if !self.active {
            return Err(LocalGameError::RoundOver);
        }
        if self.is_computer_turn() {
            return Err(LocalGameError::ComputerTurn);
        }

        if !self.has_human_move() {
            return Err(GameError::NoHistory.into());
        }

        let mut undone = vec![self.state.undo_last()?];
        if self.is_computer_turn() && self.state.history_len() > 0 {
            undone.push(self.state.undo_last()?);
        }

        Ok(vec![GameEvent::Undone(undone)])
    }

    pub fn reset(&mut self) -> Vec<GameEvent> {
        self.state.reset();
        self.active = true;
        vec![GameEvent::Reset]
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Vec<GameEvent> {
        self.difficulty = difficulty;
        vec![GameEvent::DifficultyChanged(difficulty)]
    }

    pub fn clear_scores(&mut self) -> Vec<GameEvent> {
        self.scoreboard.reset();
        vec![GameEvent::ScoresCleared]
    }

    fn has_human_move(&self) -> bool {
        !self.difficulty.is_computer()
            || self.state.history().iter().any(|m| m.mark != self.computer_mark)
    }

    fn apply(
        &mut self,
        index: usize,
        mark: Mark,
        by_computer: bool,
    ) -> Result<Vec<GameEvent>, LocalGameError> {
        let status = self.state.apply_move(index, mark)?;
        let mut events = vec![GameEvent::MovePlayed {
            played: Move::new(index, mark),
            by_computer,
        }];

        match status {
            GameStatus::InProgress => {}
            GameStatus::Won(_) => {
                if let Some(line) = self.state.winning_line() {
                    events.push(GameEvent::Won(line));
                }
                self.finish_round(status);
            }
            GameStatus::Draw => {
                events.push(GameEvent::Draw);
                self.finish_round(status);
            }
        }

        Ok(events)
    }

    fn finish_round(&mut self, status: GameStatus) {
        self.active = false;
        self.scoreboard.record(status);
    }
}
