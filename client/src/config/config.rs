use serde::{Deserialize, Serialize};
use tictactoe_common::tictactoe::{Difficulty, Mark};

use super::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use crate::ui::Theme;

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

const MAX_THINK_DELAY_MS: u32 = 5000;

pub fn get_config_manager(
    file_path: &str,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(file_path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub game: GameConfig,
    pub display: DisplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.game.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub computer_mark: Mark,
    pub think_delay_ms: u32,
    pub seed: Option<u64>,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.think_delay_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "think_delay_ms must not exceed {}",
                MAX_THINK_DELAY_MS
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Medium,
            computer_mark: Mark::O,
            think_delay_ms: 400,
            seed: None,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    pub theme: Theme,
    pub sound: bool,
    pub show_rules_on_start: bool,
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            sound: true,
            show_rules_on_start: false,
        }
    }
}
