//! Directional compaction/merge pass over a [`Board`].
//!
//! Tiles are processed starting from the wall they slide towards, so by the
//! time a tile scans forward every tile it could meet has already settled.
//! Each tile merges at most once per pass and a cell that received a merge
//! cannot receive another until the next pass.

use std::cmp::Ordering;

use super::board::{Board, Tile, MAX_TILE};
use super::Move;

/// Cells that already absorbed a merge during the current pass.
struct MergeMask {
    cols: usize,
    merged: Vec<bool>,
}

impl MergeMask {
    fn new(board: &Board) -> Self {
        MergeMask { cols: board.cols(), merged: vec![false; board.rows() * board.cols()] }
    }

    #[inline]
    fn is_set(&self, row: usize, col: usize) -> bool {
        self.merged[row * self.cols + col]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize) {
        self.merged[row * self.cols + col] = true;
    }
}

/// Order in which tiles settle for a slide in `dir`: nearest the target wall first.
fn processing_order(dir: Move) -> impl Fn(&Tile, &Tile) -> Ordering {
    move |a: &Tile, b: &Tile| {
        let by_row = a.row.cmp(&b.row);
        let by_col = a.col.cmp(&b.col);
        let (by_row, by_col) = match dir {
            Move::Up => (by_row, by_col),
            Move::Down => (by_row.reverse(), by_col.reverse()),
            Move::Left => (by_row.reverse(), by_col),
            Move::Right => (by_row, by_col.reverse()),
        };
        by_row.then(by_col).then(a.value.cmp(&b.value))
    }
}

/// Where `tile` comes to rest, and with which value.
fn settle(board: &Board, merged: &mut MergeMask, tile: Tile, dir: Move) -> Tile {
    let step = dir.offset();
    let mut rest = tile;
    while let Some((row, col)) = board.neighbor(rest.row, rest.col, step) {
        match board.get(row, col) {
            0 => {
                rest.row = row;
                rest.col = col;
            }
            occupant if occupant == tile.value && tile.value < MAX_TILE && !merged.is_set(row, col) => {
                merged.set(row, col);
                return Tile { row, col, value: tile.value * 2 };
            }
            _ => break,
        }
    }
    rest
}

/// Slide every tile on `board` towards `dir`, merging equal neighbours once.
///
/// Returns true if any tile ended up in a different cell. No tile is spawned.
pub fn compact(board: &mut Board, dir: Move) -> bool {
    let mut tiles = board.non_empty_tiles();
    tiles.sort_by(processing_order(dir));

    let mut merged = MergeMask::new(board);
    let mut changed = false;
    for tile in tiles {
        let rest = settle(board, &mut merged, tile, dir);
        if (rest.row, rest.col) != (tile.row, tile.col) {
            board.set(tile.row, tile.col, 0);
            board.set(rest.row, rest.col, rest.value);
            changed = true;
        }
    }
    changed
}

/// Whether sliding `board` towards `dir` would move any tile. `board` is untouched.
pub fn would_change(board: &Board, dir: Move) -> bool {
    let mut scratch = board.clone();
    compact(&mut scratch, dir)
}
