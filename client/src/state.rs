use tictactoe_common::tictactoe::{CELL_COUNT, Difficulty};

/// One line of player input, already interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    /// Zero-based cell index.
    Place(usize),
    Undo,
    Reset,
    SetDifficulty(Difficulty),
    ToggleTheme,
    Rules,
    Score,
    ClearScore,
    Board,
    Help,
    Quit,
    Unknown(String),
}

impl ClientCommand {
    /// Parses a raw input line. Blank lines yield `None`; anything
    /// unrecognised becomes `Unknown` with a message for the player.
    pub fn parse(line: &str) -> Option<ClientCommand> {
        let mut words = line.split_whitespace();
        let head = words.next()?.to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Some(unknown_command(line));
        }

        let command = match (head.as_str(), arg) {
            ("q" | "quit" | "exit", None) => ClientCommand::Quit,
            ("u" | "undo", None) => ClientCommand::Undo,
            ("r" | "reset" | "new", None) => ClientCommand::Reset,
            ("t" | "theme", None) => ClientCommand::ToggleTheme,
            ("rules", None) => ClientCommand::Rules,
            ("s" | "score" | "scores", None) => ClientCommand::Score,
            ("clear-score" | "clear", None) => ClientCommand::ClearScore,
            ("b" | "board", None) => ClientCommand::Board,
            ("h" | "help" | "?", None) => ClientCommand::Help,
            ("d" | "difficulty", Some(level)) => match level.parse::<Difficulty>() {
                Ok(difficulty) => ClientCommand::SetDifficulty(difficulty),
                Err(e) => ClientCommand::Unknown(e),
            },
            ("d" | "difficulty", None) => ClientCommand::Unknown(
                "Usage: difficulty <human|easy|medium|hard>".to_string(),
            ),
            ("p" | "place", Some(cell)) => parse_cell(cell),
            (cell, None) if cell.chars().all(|c| c.is_ascii_digit()) => parse_cell(cell),
            _ => unknown_command(line),
        };

        Some(command)
    }

    /// Commands that change the board or the opponent. Refused while the
    /// computer's move is pending.
    pub fn mutates_game(&self) -> bool {
        matches!(
            self,
            ClientCommand::Place(_)
                | ClientCommand::Undo
                | ClientCommand::Reset
                | ClientCommand::SetDifficulty(_)
        )
    }
}

fn unknown_command(line: &str) -> ClientCommand {
    ClientCommand::Unknown(format!(
        "Unknown command '{}'. Type 'help' for the list of commands.",
        line.trim()
    ))
}

fn parse_cell(text: &str) -> ClientCommand {
    match text.parse::<usize>() {
        Ok(cell) if (1..=CELL_COUNT).contains(&cell) => ClientCommand::Place(cell - 1),
        _ => ClientCommand::Unknown(format!(
            "Cells are numbered 1 to {}, got '{}'",
            CELL_COUNT, text
        )),
    }
}
