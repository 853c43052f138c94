mod board;
mod bot_controller;
mod error;
mod game_state;
mod scoreboard;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, calculate_heuristic_move, calculate_minimax_move, calculate_move,
    calculate_random_move,
};
pub use error::GameError;
pub use game_state::GameState;
pub use scoreboard::Scoreboard;
pub use types::{BOARD_SIZE, CELL_COUNT, Difficulty, GameStatus, Mark, Move, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, check_win_with_line, find_completing_cell};
