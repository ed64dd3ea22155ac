use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::engine::{History, Spawner, WinningValue};
use crate::error::GameError;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("toml parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] GameError),
}

/// Game setup, loadable from TOML. Omitted keys take their defaults.
///
/// ```toml
/// height = 4
/// width = 4
/// winning_value = 2048
/// four_probability = 0.1
/// undo_depth = 32
/// seed = 7
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    #[serde(default = "defaults::height")]
    pub height: usize,
    #[serde(default = "defaults::width")]
    pub width: usize,
    #[serde(default = "defaults::winning_value")]
    pub winning_value: i64,
    /// Probability that a spawned tile is a 4 rather than a 2.
    #[serde(default = "defaults::four_probability")]
    pub four_probability: f64,
    /// Keep at most this many undo snapshots. Unbounded when absent.
    #[serde(default)]
    pub undo_depth: Option<usize>,
    /// Seed for the spawn RNG; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: defaults::height(),
            width: defaults::width(),
            winning_value: defaults::winning_value(),
            four_probability: defaults::four_probability(),
            undo_depth: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field without building a game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.height == 0 || self.width == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "board dimensions must be non-zero, got {}x{}",
                self.height, self.width
            )));
        }
        self.winning_value()?;
        self.spawner()?;
        self.history()?;
        Ok(())
    }

    pub(crate) fn winning_value(&self) -> Result<WinningValue, GameError> {
        WinningValue::new(self.winning_value)
    }

    pub(crate) fn spawner(&self) -> Result<Spawner, GameError> {
        Spawner::new(self.four_probability)
    }

    pub(crate) fn history(&self) -> Result<History, GameError> {
        match self.undo_depth {
            Some(depth) => History::with_max_depth(depth),
            None => Ok(History::new()),
        }
    }
}

mod defaults {
    pub fn height() -> usize { 4 }
    pub fn width() -> usize { 4 }
    pub fn winning_value() -> i64 { 1024 }
    pub fn four_probability() -> f64 { 0.5 }
}
