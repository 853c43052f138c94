mod local_game;
mod tictactoe_runner;

pub use local_game::{GameEvent, LocalGame, LocalGameError};
pub use tictactoe_runner::run_tictactoe_game;
