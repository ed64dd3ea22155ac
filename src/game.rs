//! A single game session: board, winning value, undo history and spawn RNG.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::engine::{oracle, slide, Board, GameStatus, History, Move, Spawner, Tile, WinningValue};
use crate::error::GameError;

/// Owns the board and everything that mutates it.
///
/// Operations either complete fully or fail leaving the session untouched.
#[derive(Debug, Clone)]
pub struct Game<R = StdRng> {
    board: Board,
    winning_value: WinningValue,
    history: History,
    spawner: Spawner,
    rng: R,
}

impl Game<StdRng> {
    /// A zero-filled `height x width` game seeded from OS entropy.
    pub fn new(height: usize, width: usize, winning_value: i64) -> Result<Self, GameError> {
        Game::with_rng(height, width, winning_value, StdRng::from_entropy())
    }

    /// Like [`Game::new`] with a deterministic spawn sequence.
    pub fn seeded(height: usize, width: usize, winning_value: i64, seed: u64) -> Result<Self, GameError> {
        Game::with_rng(height, width, winning_value, StdRng::seed_from_u64(seed))
    }

    /// Build a zero-filled game from a validated config.
    pub fn from_config(cfg: &GameConfig) -> Result<Self, GameError> {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let winning_value = cfg.winning_value()?;
        let spawner = cfg.spawner()?;
        let history = cfg.history()?;
        let board = Board::new(cfg.height, cfg.width)?;
        Ok(Game { board, winning_value, history, spawner, rng })
    }
}

impl<R: Rng> Game<R> {
    /// A zero-filled game drawing spawns from `rng`.
    pub fn with_rng(height: usize, width: usize, winning_value: i64, rng: R) -> Result<Self, GameError> {
        let winning_value = WinningValue::new(winning_value)?;
        let board = Board::new(height, width)?;
        Ok(Game { board, winning_value, history: History::new(), spawner: Spawner::default(), rng })
    }

    /// Replace the spawn policy.
    pub fn with_spawner(mut self, spawner: Spawner) -> Self {
        self.spawner = spawner;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn winning_value(&self) -> WinningValue {
        self.winning_value
    }

    /// Number of snapshots available to [`Game::undo`].
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn tiles(&self) -> Vec<Tile> {
        self.board.non_empty_tiles()
    }

    /// Reallocate a zero-filled board and set a new winning value. Clears history.
    ///
    /// The winning value is checked before anything is allocated.
    pub fn resize(&mut self, height: usize, width: usize, winning_value: i64) -> Result<(), GameError> {
        let winning_value = WinningValue::new(winning_value)?;
        self.board = Board::new(height, width)?;
        self.winning_value = winning_value;
        self.history.clear();
        debug!("resized to {height}x{width}, winning value {winning_value}");
        Ok(())
    }

    /// Force an exact board state. `grid` must match the board's shape.
    pub fn set_values(&mut self, grid: &[Vec<u32>]) -> Result<(), GameError> {
        self.board.set_values(grid)
    }

    /// Zero every tile, clear history, then spawn exactly two tiles.
    pub fn reset(&mut self) -> Result<[Tile; 2], GameError> {
        let mut next = self.board.clone();
        next.clear();
        let first = self.spawner.place_random(&mut next, &mut self.rng)?;
        let second = self.spawner.place_random(&mut next, &mut self.rng)?;
        self.board = next;
        self.history.clear();
        debug!("reset: spawned {first} and {second}");
        Ok([first, second])
    }

    /// Slide every tile towards `dir`, merging equal neighbours once each.
    ///
    /// The prior board is always pushed onto the history, even when nothing
    /// moves. When the board changed, one random tile is spawned. Returns
    /// whether the board changed.
    pub fn slide(&mut self, dir: Move) -> Result<bool, GameError> {
        let mut next = self.board.clone();
        let changed = slide::compact(&mut next, dir);
        if changed {
            self.spawner.place_random(&mut next, &mut self.rng)?;
        }
        let prior = std::mem::replace(&mut self.board, next);
        self.history.push(prior);
        debug!("slide {dir}: changed={changed}, history={}", self.history.len());
        Ok(changed)
    }

    /// Restore the board saved by the most recent slide.
    pub fn undo(&mut self) -> Result<&Board, GameError> {
        self.board = self.history.pop()?;
        debug!("undo: history={}", self.history.len());
        Ok(&self.board)
    }

    pub fn has_won(&self) -> bool {
        oracle::has_won(&self.board, self.winning_value)
    }

    /// Side-effect free: neither the board nor the history changes.
    pub fn has_move_left(&self) -> bool {
        oracle::has_move_left(&self.board)
    }

    pub fn available_moves(&self) -> Vec<Move> {
        oracle::available_moves(&self.board)
    }

    pub fn status(&self) -> GameStatus {
        oracle::status(&self.board, self.winning_value)
    }
}
