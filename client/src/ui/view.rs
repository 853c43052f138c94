use std::io::{self, Write};

use super::render::{HELP, RULES, render_board, render_scores, render_status};
use super::theme::{Palette, Theme};
use crate::offline::{GameEvent, LocalGame};

const BELL: &str = "\u{7}";

/// Terminal output for one session. Everything the player sees goes through here.
pub struct View<W: Write> {
    out: W,
    theme: Theme,
    colored: bool,
    sound: bool,
}

impl<W: Write> View<W> {
    pub fn new(out: W, theme: Theme, colored: bool, sound: bool) -> Self {
        Self {
            out,
            theme,
            colored,
            sound,
        }
    }

    fn palette(&self) -> Palette {
        self.theme.palette(self.colored)
    }

    pub fn toggle_theme(&mut self) -> io::Result<()> {
        self.theme = self.theme.toggled();
        let line = format!("Theme: {}", self.theme.name());
        self.message(&line)
    }

    pub fn show_welcome(&mut self, game: &LocalGame, show_rules: bool) -> io::Result<()> {
        let palette = self.palette();
        let opponent = if game.difficulty().is_computer() {
            format!(
                "Playing against the computer ({}), which plays {}.",
                game.difficulty(),
                game.computer_mark()
            )
        } else {
            "Two players on one board.".to_string()
        };
        writeln!(self.out, "{}", palette.paint_bold("Tic-tac-toe", palette.highlight))?;
        writeln!(self.out, "{} Type 'help' for commands.", opponent)?;
        if show_rules {
            writeln!(self.out, "{}", RULES)?;
        }
        self.show_board(game)
    }

    pub fn show_board(&mut self, game: &LocalGame) -> io::Result<()> {
        let palette = self.palette();
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{}",
            render_board(game.state().board(), game.state().winning_line(), &palette)
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", render_status(game, &palette))?;
        self.out.flush()
    }

    pub fn show_events(&mut self, game: &LocalGame, events: &[GameEvent]) -> io::Result<()> {
        let palette = self.palette();
        let mut finished = false;

        for event in events {
            match event {
                GameEvent::MovePlayed {
                    played,
                    by_computer,
                } => {
                    let who = if *by_computer { "Computer" } else { "Player" };
                    writeln!(self.out, "{} {} takes cell {}", who, played.mark, played.index + 1)?;
                }
                GameEvent::Won(line) => {
                    finished = true;
                    let banner = format!("Player {} wins!", line.mark);
                    writeln!(self.out, "{}", palette.paint_bold(&banner, palette.highlight))?;
                }
                GameEvent::Draw => {
                    finished = true;
                    let banner = palette.paint_bold("It's a draw!", palette.highlight);
                    writeln!(self.out, "{}", banner)?;
                }
                GameEvent::Undone(moves) => {
                    let cells: Vec<String> =
                        moves.iter().map(|m| (m.index + 1).to_string()).collect();
                    writeln!(self.out, "Took back cell {}", cells.join(" and "))?;
                }
                GameEvent::Reset => writeln!(self.out, "New round")?,
                GameEvent::DifficultyChanged(difficulty) => {
                    writeln!(self.out, "Difficulty: {}", difficulty)?
                }
                GameEvent::ScoresCleared => writeln!(self.out, "Scores cleared")?,
            }
        }

        if finished {
            if self.sound {
                write!(self.out, "{}", BELL)?;
            }
            writeln!(self.out, "{}", render_scores(game.scoreboard(), &palette))?;
        }

        let changes_board = events.iter().any(|e| {
            !matches!(e, GameEvent::DifficultyChanged(_) | GameEvent::ScoresCleared)
        });
        if changes_board {
            self.show_board(game)
        } else {
            self.out.flush()
        }
    }

    pub fn show_scores(&mut self, game: &LocalGame) -> io::Result<()> {
        let palette = self.palette();
        writeln!(self.out, "{}", render_scores(game.scoreboard(), &palette))?;
        self.out.flush()
    }

    pub fn show_rules(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", RULES)?;
        self.out.flush()
    }

    pub fn show_help(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", HELP)?;
        self.out.flush()
    }

    pub fn message(&mut self, text: &str) -> io::Result<()> {
        let palette = self.palette();
        writeln!(self.out, "{}", palette.paint(text, palette.text))?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
