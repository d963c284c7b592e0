use std::io::ErrorKind;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tictactoe_engine::types::Player;

pub const DEFAULT_CONFIG_FILE: &str = "tictactoe_config.yaml";

const MAX_THINKING_DELAY_MS: u64 = 10_000;

/// Which mark the human plays. `X` opens the game, so choosing `O` lets the
/// engine move first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkSelection {
    X,
    O,
    Random,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Pause before the engine replies. Purely cosmetic; the search result
    /// does not depend on it.
    pub thinking_delay_ms: u64,
    pub human_mark: MarkSelection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thinking_delay_ms: 600,
            human_mark: MarkSelection::X,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if self.thinking_delay_ms > MAX_THINKING_DELAY_MS {
            return Err(format!(
                "thinking_delay_ms must be at most {}",
                MAX_THINKING_DELAY_MS
            ));
        }
        Ok(())
    }

    pub fn resolve_human_mark(&self) -> Player {
        match self.human_mark {
            MarkSelection::X => Player::X,
            MarkSelection::O => Player::O,
            MarkSelection::Random => {
                if rand::rng().random() {
                    Player::X
                } else {
                    Player::O
                }
            }
        }
    }
}

/// Reads the YAML config at `path`. A missing file is not an error: the
/// defaults apply.
pub fn load_config(path: &str) -> Result<Config, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };

    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}
