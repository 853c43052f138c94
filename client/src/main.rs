mod config;
mod logger;
mod offline;
mod state;
mod ui;

use std::io::{BufRead, IsTerminal};
use std::time::Duration;

use clap::Parser;
use tictactoe_common::SessionRng;
use tictactoe_common::tictactoe::{Difficulty, Mark};
use tokio::sync::mpsc;

use config::{CONFIG_FILE, Config, ConfigError, Validate, get_config_manager};
use offline::{LocalGame, run_tictactoe_game};
use state::ClientCommand;
use ui::View;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe in the terminal")]
struct Args {
    /// YAML settings file; created with defaults by --save-config
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    /// human, easy, medium or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Which mark the computer plays
    #[arg(long)]
    computer_mark: Option<Mark>,

    /// Seed for the computer's random choices
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    think_delay_ms: Option<u32>,

    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,

    #[arg(long)]
    no_color: bool,

    /// Diagnostic log on stderr
    #[arg(long)]
    log: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(difficulty) = self.difficulty {
            config.game.difficulty = difficulty;
        }
        if let Some(mark) = self.computer_mark {
            config.game.computer_mark = mark;
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        if let Some(delay) = self.think_delay_ms {
            config.game.think_delay_ms = delay;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.log);

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate().map_err(ConfigError::Invalid)?;
    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", args.config);
    }

    let rng = match config.game.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Starting session: difficulty {}, computer plays {}, seed {}",
        config.game.difficulty,
        config.game.computer_mark,
        rng.seed()
    );

    let mut game = LocalGame::new(config.game.difficulty, config.game.computer_mark, rng);
    let colored = !args.no_color && std::io::stdout().is_terminal();
    let mut view = View::new(
        std::io::stdout(),
        config.display.theme,
        colored,
        config.display.sound,
    );

    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || read_commands(command_tx));

    view.show_welcome(&game, config.display.show_rules_on_start)?;
    run_tictactoe_game(
        &mut command_rx,
        &mut game,
        &mut view,
        Duration::from_millis(u64::from(config.game.think_delay_ms)),
    )
    .await?;

    let scores = game.scoreboard();
    log!(
        "Session over: X {} O {} draws {}",
        scores.wins(Mark::X),
        scores.wins(Mark::O),
        scores.draws()
    );

    Ok(())
}

/// Blocking stdin reader. Lives on its own thread so quitting never waits on a pending read.
fn read_commands(command_tx: mpsc::UnboundedSender<ClientCommand>) {
    for line in std::io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log!("Failed to read input: {}", e);
                break;
            }
        };
        if let Some(command) = ClientCommand::parse(&line) {
            if command_tx.send(command).is_err() {
                break;
            }
        }
    }
}
