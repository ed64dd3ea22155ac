use std::collections::VecDeque;

use super::board::Board;
use crate::error::GameError;

/// Undo stack of board snapshots, most recent last.
///
/// With a depth limit the oldest snapshot is dropped once the limit is hit.
#[derive(Debug, Clone, Default)]
pub struct History {
    snapshots: VecDeque<Board>,
    max_depth: Option<usize>,
}

impl History {
    /// An unbounded, empty history.
    pub fn new() -> Self {
        History::default()
    }

    /// An empty history that retains at most `max_depth` snapshots.
    pub fn with_max_depth(max_depth: usize) -> Result<Self, GameError> {
        if max_depth == 0 {
            return Err(GameError::InvalidConfiguration("undo depth must be at least 1".to_string()));
        }
        Ok(History { snapshots: VecDeque::with_capacity(max_depth), max_depth: Some(max_depth) })
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    pub fn push(&mut self, snapshot: Board) {
        if self.max_depth.is_some_and(|limit| self.snapshots.len() >= limit) {
            self.snapshots.pop_front();
        }
        self.snapshots.push_back(snapshot);
    }

    /// Remove and return the most recent snapshot.
    pub fn pop(&mut self) -> Result<Board, GameError> {
        self.snapshots.pop_back().ok_or(GameError::EmptyHistory)
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
