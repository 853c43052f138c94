use std::io::{self, Write};
use std::time::Duration;

use tictactoe_common::tictactoe::GameError;
use tokio::sync::mpsc;

use super::{GameEvent, LocalGame, LocalGameError};
use crate::log;
use crate::state::ClientCommand;
use crate::ui::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Drives one terminal session until the player quits or input closes.
///
/// Only this loop touches `game`. While the computer's move is pending, the
/// board can still be inspected but nothing that changes it is accepted.
pub async fn run_tictactoe_game<W: Write>(
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    game: &mut LocalGame,
    view: &mut View<W>,
    think_delay: Duration,
) -> io::Result<()> {
    loop {
        if game.is_computer_turn() {
            if wait_for_computer(command_rx, game, view, think_delay).await? == Flow::Quit {
                return Ok(());
            }

            match game.play_computer() {
                Ok(events) => {
                    log_events(&events);
                    view.show_events(game, &events)?;
                    continue;
                }
                Err(e) => {
                    log!("Computer could not move: {}", e);
                    view.message(&e.to_string())?;
                }
            }
        }

        let Some(command) = command_rx.recv().await else {
            log!("Input closed");
            return Ok(());
        };

        if handle_command(command, game, view)? == Flow::Quit {
            return Ok(());
        }
    }
}

async fn wait_for_computer<W: Write>(
    command_rx: &mut mpsc::UnboundedReceiver<ClientCommand>,
    game: &mut LocalGame,
    view: &mut View<W>,
    think_delay: Duration,
) -> io::Result<Flow> {
    if think_delay.is_zero() {
        return Ok(Flow::Continue);
    }

    let thinking = tokio::time::sleep(think_delay);
    tokio::pin!(thinking);

    loop {
        tokio::select! {
            _ = &mut thinking => return Ok(Flow::Continue),
            command = command_rx.recv() => {
                let Some(command) = command else {
                    (&mut thinking).await;
                    return Ok(Flow::Continue);
                };

                if command.mutates_game() {
                    view.message("The computer is thinking...")?;
                } else if handle_command(command, game, view)? == Flow::Quit {
                    return Ok(Flow::Quit);
                }
            }
        }
    }
}

fn handle_command<W: Write>(
    command: ClientCommand,
    game: &mut LocalGame,
    view: &mut View<W>,
) -> io::Result<Flow> {
    match command {
        ClientCommand::Quit => return Ok(Flow::Quit),
        ClientCommand::Place(index) => {
            let result = game.play_human(index);
            report(view, game, result)?;
        }
        ClientCommand::Undo => {
            let result = game.undo();
            report(view, game, result)?;
        }
        ClientCommand::Reset => {
            let events = game.reset();
            log!("Round reset, seed {}", game.seed());
            view.show_events(game, &events)?;
        }
        ClientCommand::SetDifficulty(difficulty) => {
            let events = game.set_difficulty(difficulty);
            log!("Difficulty changed to {}", difficulty);
            view.show_events(game, &events)?;
        }
        ClientCommand::ToggleTheme => {
            view.toggle_theme()?;
            view.show_board(game)?;
        }
        ClientCommand::ClearScore => {
            let events = game.clear_scores();
            view.show_events(game, &events)?;
            view.show_scores(game)?;
        }
        ClientCommand::Score => view.show_scores(game)?,
        ClientCommand::Board => view.show_board(game)?,
        ClientCommand::Rules => view.show_rules()?,
        ClientCommand::Help => view.show_help()?,
        ClientCommand::Unknown(message) => view.message(&message)?,
    }
    Ok(Flow::Continue)
}

fn report<W: Write>(
    view: &mut View<W>,
    game: &LocalGame,
    result: Result<Vec<GameEvent>, LocalGameError>,
) -> io::Result<()> {
    match result {
        Ok(events) => {
            log_events(&events);
            view.show_events(game, &events)
        }
        Err(LocalGameError::Game(GameError::NoHistory)) => view.message("Nothing to undo"),
        Err(LocalGameError::Game(GameError::CellOccupied(index))) => {
            view.message(&format!("Cell {} is already taken", index + 1))
        }
        Err(
            error @ LocalGameError::Game(GameError::InvalidIndex(_) | GameError::OutOfTurn { .. }),
        ) => {
            log!("Unexpected rejection: {}", error);
            view.message(&error.to_string())
        }
        Err(error) => view.message(&error.to_string()),
    }
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::MovePlayed {
                played,
                by_computer,
            } => log!(
                "{} placed {} at {}",
                if *by_computer { "Computer" } else { "Player" },
                played.mark,
                played.index
            ),
            GameEvent::Won(line) => log!("{} won on {:?}", line.mark, line.cells),
            GameEvent::Draw => log!("Round drawn"),
            GameEvent::Undone(moves) => log!("Undid {} move(s)", moves.len()),
            _ => {}
        }
    }
}
