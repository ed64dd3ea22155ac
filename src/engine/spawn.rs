use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use super::board::{Board, Tile};
use crate::error::GameError;

/// Places new tiles on random empty cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawner {
    four_probability: f64,
}

impl Default for Spawner {
    /// 2 and 4 equally likely.
    fn default() -> Self {
        Spawner { four_probability: 0.5 }
    }
}

impl Spawner {
    /// A spawner producing a 4 with probability `four_probability`, else a 2.
    pub fn new(four_probability: f64) -> Result<Self, GameError> {
        if !(0.0..=1.0).contains(&four_probability) {
            return Err(GameError::InvalidConfiguration(format!(
                "four probability {four_probability} is outside [0, 1]"
            )));
        }
        Ok(Spawner { four_probability })
    }

    pub fn four_probability(&self) -> f64 {
        self.four_probability
    }

    fn generate_value<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        if rng.gen_bool(self.four_probability) { 4 } else { 2 }
    }

    /// Write a random tile into a uniformly chosen empty cell of `board`.
    pub fn place_random<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> Result<Tile, GameError> {
        let &(row, col) = board.empty_cells().choose(rng).ok_or(GameError::BoardFull)?;
        let value = self.generate_value(rng);
        board.set(row, col, value);
        let tile = Tile { row, col, value };
        trace!("spawned {tile}");
        Ok(tile)
    }
}
