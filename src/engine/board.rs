use std::fmt;

use crate::error::GameError;

/// Largest tile a merge may produce; merges past it are blocked.
pub const MAX_TILE: u32 = 1 << 31;

type Value = u32;

#[inline]
fn is_tile_value(value: Value) -> bool {
    value == 0 || value.is_power_of_two()
}

/// The configured tile value whose appearance wins the game.
///
/// Always a positive power of two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningValue(Value);

impl WinningValue {
    /// Validate a raw winning value.
    ///
    /// ```
    /// use game_1024::engine::WinningValue;
    /// assert!(WinningValue::new(1024).is_ok());
    /// assert!(WinningValue::new(3).is_err());
    /// assert!(WinningValue::new(-4).is_err());
    /// ```
    pub fn new(raw: i64) -> Result<Self, GameError> {
        match Value::try_from(raw) {
            Ok(v) if v.is_power_of_two() => Ok(WinningValue(v)),
            _ => Err(GameError::InvalidConfiguration(format!(
                "winning value {raw} is not a positive power of two"
            ))),
        }
    }

    #[inline]
    pub fn get(self) -> Value {
        self.0
    }
}

impl fmt::Display for WinningValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-empty cell as seen at one point in time. Not stored in the grid.
///
/// Orders by row, then column, then value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    pub row: usize,
    pub col: usize,
    pub value: Value,
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) = {}", self.row, self.col, self.value)
    }
}

/// Row-major `rows x cols` grid of tile values, 0 meaning empty.
///
/// Dimensions are fixed once built; every stored value is 0 or a power of two.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Value>,
}

impl Board {
    /// Allocate a zero-filled board. Both dimensions must be non-zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "board dimensions must be non-zero, got {rows}x{cols}"
            )));
        }
        Ok(Board { rows, cols, cells: vec![0; rows * cols] })
    }

    /// Build a board shaped like `grid` and holding its values.
    pub fn from_grid(grid: &[Vec<Value>]) -> Result<Self, GameError> {
        let cols = grid.first().map_or(0, Vec::len);
        let mut board = Board::new(grid.len(), cols)?;
        board.set_values(grid)?;
        Ok(board)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Value at `(row, col)`, 0 when empty.
    ///
    /// Panics if the coordinate lies outside the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Value {
        self.cells[self.index(row, col)]
    }

    /// Column-first lookup: value at column `col`, row `row`, 0 when empty.
    #[inline]
    pub fn cell_value_at(&self, col: usize, row: usize) -> Value {
        self.get(row, col)
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Value) {
        debug_assert!(is_tile_value(value));
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Zero every cell.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Copy `grid` into the board.
    ///
    /// The grid must have exactly this board's shape and hold only 0 or powers
    /// of two; otherwise nothing is written.
    pub fn set_values(&mut self, grid: &[Vec<Value>]) -> Result<(), GameError> {
        let ragged = grid.iter().find(|row| row.len() != self.cols);
        if grid.len() != self.rows || ragged.is_some() {
            let found_cols = ragged.or(grid.first()).map_or(0, Vec::len);
            return Err(GameError::DimensionMismatch {
                expected: (self.rows, self.cols),
                found: (grid.len(), found_cols),
            });
        }
        for (row, line) in grid.iter().enumerate() {
            if let Some((col, &value)) = line.iter().enumerate().find(|(_, &v)| !is_tile_value(v)) {
                return Err(GameError::InvalidTileValue { row, col, value });
            }
        }
        for (dst, src) in self.cells.chunks_mut(self.cols).zip(grid) {
            dst.copy_from_slice(src);
        }
        Ok(())
    }

    /// Deep copy of the grid as nested rows.
    pub fn to_grid(&self) -> Vec<Vec<Value>> {
        self.cells.chunks(self.cols).map(<[Value]>::to_vec).collect()
    }

    /// Every non-empty cell, in row-major order.
    pub fn non_empty_tiles(&self) -> Vec<Tile> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &value)| value != 0)
            .map(|(idx, &value)| Tile { row: idx / self.cols, col: idx % self.cols, value })
            .collect()
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &value)| value == 0)
            .map(|(idx, _)| (idx / self.cols, idx % self.cols))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Highest tile value on the board (0 for an empty board).
    pub fn highest_tile(&self) -> Value {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn contains(&self, value: Value) -> bool {
        self.cells.contains(&value)
    }

    /// The cell one step from `(row, col)` in direction `(dr, dc)`, if on the board.
    #[inline]
    pub(crate) fn neighbor(&self, row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < self.rows && c < self.cols).then_some((r, c))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("grid", &self.to_grid())
            .finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(self.cols * 8 - 1);
        writeln!(f)?;
        for (r, line) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f, "{rule}")?;
            }
            let cells: Vec<String> = line.iter().map(format_val).collect();
            writeln!(f, "{}", cells.join("|"))?;
        }
        Ok(())
    }
}

fn format_val(val: &Value) -> String {
    match val {
        0 => " ".repeat(7),
        x => format!("{x:^7}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winning_value_validation() {
        for bad in [3, -4, 0, 6, 1 << 33] {
            assert!(matches!(WinningValue::new(bad), Err(GameError::InvalidConfiguration(_))), "{bad}");
        }
        assert_eq!(WinningValue::new(1024).unwrap().get(), 1024);
        assert_eq!(WinningValue::new(1).unwrap().get(), 1);
    }

    #[test]
    fn new_board_is_empty() {
        let b = Board::new(3, 5).unwrap();
        assert_eq!((b.rows(), b.cols()), (3, 5));
        assert_eq!(b.count_empty(), 15);
        assert!(b.non_empty_tiles().is_empty());
        assert_eq!(b.highest_tile(), 0);
        assert!(Board::new(0, 4).is_err());
        assert!(Board::new(4, 0).is_err());
    }

    #[test]
    fn set_values_copies_grid() {
        let mut b = Board::new(2, 3).unwrap();
        let grid = vec![vec![2, 0, 4], vec![0, 8, 0]];
        b.set_values(&grid).unwrap();
        assert_eq!(b.to_grid(), grid);
        assert_eq!(b.get(1, 1), 8);
        assert_eq!(b.cell_value_at(2, 0), 4);
        assert_eq!(b.cell_value_at(0, 1), 0);
        assert_eq!(b.count_empty(), 3);
        assert_eq!(b.empty_cells(), vec![(0, 1), (1, 0), (1, 2)]);
        assert_eq!(b.highest_tile(), 8);
        assert!(b.contains(4));
        assert!(!b.contains(16));
    }

    #[test]
    fn set_values_rejects_wrong_shape() {
        let mut b = Board::new(2, 2).unwrap();
        b.set_values(&[vec![2, 2], vec![4, 4]]).unwrap();
        let before = b.clone();

        let err = b.set_values(&[vec![0, 0, 0], vec![0, 0, 0]]).unwrap_err();
        assert_eq!(err, GameError::DimensionMismatch { expected: (2, 2), found: (2, 3) });
        let err = b.set_values(&[vec![0, 0]]).unwrap_err();
        assert_eq!(err, GameError::DimensionMismatch { expected: (2, 2), found: (1, 2) });
        let err = b.set_values(&[vec![0, 0], vec![0]]).unwrap_err();
        assert_eq!(err, GameError::DimensionMismatch { expected: (2, 2), found: (2, 1) });
        assert_eq!(b, before);
    }

    #[test]
    fn set_values_rejects_non_power_of_two() {
        let mut b = Board::new(2, 2).unwrap();
        let err = b.set_values(&[vec![2, 0], vec![0, 6]]).unwrap_err();
        assert_eq!(err, GameError::InvalidTileValue { row: 1, col: 1, value: 6 });
        assert_eq!(b.count_empty(), 4);
    }

    #[test]
    fn non_empty_tiles_are_row_major() {
        let b = Board::from_grid(&[vec![0, 2], vec![4, 0], vec![8, 16]]).unwrap();
        let tiles = b.non_empty_tiles();
        assert_eq!(
            tiles,
            vec![
                Tile { row: 0, col: 1, value: 2 },
                Tile { row: 1, col: 0, value: 4 },
                Tile { row: 2, col: 0, value: 8 },
                Tile { row: 2, col: 1, value: 16 },
            ]
        );
        let mut sorted = tiles.clone();
        sorted.sort();
        assert_eq!(sorted, tiles);
    }

    #[test]
    fn neighbor_stays_on_board() {
        let b = Board::new(2, 3).unwrap();
        assert_eq!(b.neighbor(0, 0, (-1, 0)), None);
        assert_eq!(b.neighbor(0, 0, (0, -1)), None);
        assert_eq!(b.neighbor(1, 2, (1, 0)), None);
        assert_eq!(b.neighbor(1, 2, (0, 1)), None);
        assert_eq!(b.neighbor(1, 1, (-1, 0)), Some((0, 1)));
        assert_eq!(b.neighbor(0, 1, (0, 1)), Some((0, 2)));
    }

    #[test]
    fn display_renders_every_row() {
        let b = Board::from_grid(&[vec![2, 0], vec![0, 1024]]).unwrap();
        let s = b.to_string();
        assert!(s.contains("2"));
        assert!(s.contains("1024"));
        assert_eq!(s.lines().filter(|l| l.contains('|')).count(), 2);
        assert_eq!(Tile { row: 1, col: 2, value: 4 }.to_string(), "(1, 2) = 4");
    }
}
