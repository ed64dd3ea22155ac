//! game-1024: a sliding-tile merge puzzle engine (2048-style)
//!
//! This crate provides:
//! - A `rows x cols` `Board` of power-of-two tiles with basic queries
//! - A directional slide/merge pass where each cell absorbs at most one merge per slide
//! - Win/loss classification that never mutates the board
//! - A snapshot-based undo history, optionally depth-limited
//! - A `Game` session tying these together with an injectable spawn RNG
//!
//! Quick start:
//! ```
//! use game_1024::{Game, GameStatus, Move};
//!
//! // Deterministic spawns via a seeded RNG
//! let mut game = Game::seeded(4, 4, 1024, 42).unwrap();
//! game.reset().unwrap();
//! assert_eq!(game.tiles().len(), 2);
//!
//! let _changed = game.slide(Move::Left).unwrap();
//! assert_eq!(game.history_len(), 1);
//! game.undo().unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```
//!
//! Forcing a board and checking the merge rule
//! ```
//! use game_1024::{Game, GameError, Move};
//!
//! let mut game = Game::seeded(1, 4, 1024, 7).unwrap();
//! game.set_values(&[vec![2, 2, 4, 4]]).unwrap();
//! assert!(game.slide(Move::Left).unwrap());
//! assert_eq!(&game.board().to_grid()[0][..2], &[4, 8]);
//!
//! assert_eq!(Game::new(4, 4, 3).unwrap_err(), GameError::InvalidConfiguration(
//!     "winning value 3 is not a positive power of two".to_string(),
//! ));
//! ```
//!
//! Injecting your own RNG
//! ```
//! use game_1024::{Game, Spawner};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let rng = StdRng::seed_from_u64(123);
//! let mut game = Game::with_rng(3, 5, 2048, rng)
//!     .unwrap()
//!     .with_spawner(Spawner::new(0.1).unwrap());
//! let [a, b] = game.reset().unwrap();
//! assert_ne!((a.row, a.col), (b.row, b.col));
//! ```
//!
pub mod config;
pub mod engine;
pub mod error;
pub mod game;

pub use config::{ConfigError, GameConfig};
pub use engine::{Board, GameStatus, Move, Spawner, Tile, WinningValue};
pub use error::GameError;
pub use game::Game;
