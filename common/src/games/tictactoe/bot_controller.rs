use crate::games::SessionRng;
use super::board::Board;
use super::game_state::GameState;
use super::types::{Difficulty, GameStatus, Mark};
use super::win_detector::find_completing_cell;

const WIN_SCORE: i32 = 10;

/// Position handed to a bot: the board and the mark the bot plays.
#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Self {
        Self { board, bot_mark }
    }

    pub fn from_game_state(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.current_turn(),
        }
    }
}

/// Picks the cell the computer plays. `None` for the human tier and for
/// boards that are already decided or full.
pub fn calculate_move(
    difficulty: Difficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    if input.board.status().is_over() {
        return None;
    }

    match difficulty {
        Difficulty::Human => None,
        Difficulty::Easy => calculate_random_move(&input.board, rng),
        Difficulty::Medium => calculate_heuristic_move(input, rng),
        Difficulty::Hard => calculate_minimax_move(input),
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    rng.pick(&board.available_moves())
}

/// Win if possible, otherwise block, otherwise play randomly.
pub fn calculate_heuristic_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let cells = input.board.cells();

    find_completing_cell(cells, input.bot_mark)
        .or_else(|| find_completing_cell(cells, input.bot_mark.opponent()))
        .or_else(|| calculate_random_move(&input.board, rng))
}

/// Full-depth minimax with alpha-beta pruning. Ties resolve to the lowest
/// cell index: a later move must score strictly higher to replace the best.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in input.board.available_moves() {
        let Ok(next) = input.board.with_move(index, input.bot_mark) else {
            continue;
        };

        // Children that cannot beat `best_score` may come back as an upper
        // bound, which is never strictly greater, so the pick is unaffected.
        let score = minimax(&next, 0, false, input.bot_mark, best_score, i32::MAX);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn minimax(
    board: &Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    match board.status() {
        GameStatus::Won(winner) if winner == bot_mark => return WIN_SCORE - depth,
        GameStatus::Won(_) => return depth - WIN_SCORE,
        GameStatus::Draw => return 0,
        GameStatus::InProgress => {}
    }

    let mover = if is_maximizing {
        bot_mark
    } else {
        bot_mark.opponent()
    };

    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for index in board.available_moves() {
        let Ok(child) = board.with_move(index, mover) else {
            continue;
        };
        let eval = minimax(&child, depth + 1, !is_maximizing, bot_mark, alpha, beta);

        if is_maximizing {
            best = best.max(eval);
            alpha = alpha.max(eval);
        } else {
            best = best.min(eval);
            beta = beta.min(eval);
        }

        if beta <= alpha {
            break;
        }
    }

    best
}
