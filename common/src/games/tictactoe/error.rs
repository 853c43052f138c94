use super::types::Mark;

/// Rejection reasons for moves and undo requests. All are caller-input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    #[display("Game is already over")]
    GameAlreadyOver,

    #[display("Cell index {} is out of range 0..=8", _0)]
    InvalidIndex(usize),

    #[display("No moves to undo")]
    NoHistory,

    #[display("It is {}'s turn, not {}'s", expected, got)]
    OutOfTurn { expected: Mark, got: Mark },
}

impl std::error::Error for GameError {}
