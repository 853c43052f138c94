use tictactoe_common::tictactoe::{BOARD_SIZE, Board, GameStatus, Mark, Scoreboard, WinningLine};

use super::theme::Palette;
use crate::offline::LocalGame;

pub const RULES: &str = "\
Rules
  1. X always moves first; players alternate placing their mark.
  2. Three of your marks in a row, column or diagonal wins the round.
  3. If all nine cells fill up without a line, the round is a draw.
  4. Against the computer, 'easy' plays randomly, 'medium' takes wins and
     blocks threats, 'hard' never loses.";

pub const HELP: &str = "\
Commands
  1-9                 place your mark in that cell
  undo, u             take back the last move (and the computer's reply)
  reset, r            start a new round (scores are kept)
  difficulty, d <lvl> human | easy | medium | hard
  theme, t            switch between dark and light colors
  score, s            show the scoreboard
  clear-score         zero the scoreboard
  board, b            show the board
  rules               show the rules
  help, h             show this list
  quit, q             leave";

pub fn render_board(board: &Board, winning_line: Option<WinningLine>, palette: &Palette) -> String {
    let separator = palette.paint("───┼───┼───", palette.muted);
    let divider = palette.paint("│", palette.muted);

    let rows: Vec<String> = (0..BOARD_SIZE)
        .map(|row| {
            (0..BOARD_SIZE)
                .map(|col| {
                    let index = row * BOARD_SIZE + col;
                    let highlighted = winning_line.is_some_and(|line| line.contains(index));
                    format!(" {} ", render_cell(board.get(index), index, highlighted, palette))
                })
                .collect::<Vec<_>>()
                .join(&divider)
        })
        .collect();

    rows.join(&format!("\n{}\n", separator))
}

fn render_cell(cell: Option<Mark>, index: usize, highlighted: bool, palette: &Palette) -> String {
    match cell {
        None => palette.paint(&(index + 1).to_string(), palette.muted),
        Some(mark) if highlighted => palette.paint_bold(&mark.to_string(), palette.highlight),
        Some(mark) => palette.paint_bold(&mark.to_string(), mark_color(mark, palette)),
    }
}

pub fn render_status(game: &LocalGame, palette: &Palette) -> String {
    match game.state().status() {
        GameStatus::Won(mark) => palette.paint_bold(
            &format!("Player {} wins! Type 'reset' to play again.", mark),
            palette.highlight,
        ),
        GameStatus::Draw => palette.paint_bold(
            "It's a draw! Type 'reset' to play again.",
            palette.highlight,
        ),
        GameStatus::InProgress => {
            let mark = game.state().current_turn();
            let who = if game.is_computer_turn() {
                format!("Computer ({}) is thinking...", game.difficulty())
            } else {
                format!("Player {}'s turn", mark)
            };
            palette.paint(&who, mark_color(mark, palette))
        }
    }
}

pub fn render_scores(scoreboard: &Scoreboard, palette: &Palette) -> String {
    format!(
        "{}  {}  {}",
        palette.paint(&format!("Player X: {}", scoreboard.wins(Mark::X)), palette.x),
        palette.paint(&format!("Player O: {}", scoreboard.wins(Mark::O)), palette.o),
        palette.paint(&format!("Draws: {}", scoreboard.draws()), palette.text),
    )
}

fn mark_color(mark: Mark, palette: &Palette) -> crossterm::style::Color {
    match mark {
        Mark::X => palette.x,
        Mark::O => palette.o,
    }
}
