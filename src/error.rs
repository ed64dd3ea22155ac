/// Errors surfaced by the game engine.
///
/// Every failing operation leaves the board and history exactly as they were
/// before the call.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("grid shape mismatch: expected (rows, cols) {expected:?}, found {found:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("tile value {value} at ({row}, {col}) is not zero or a power of two")]
    InvalidTileValue { row: usize, col: usize, value: u32 },
    #[error("no snapshot to undo")]
    EmptyHistory,
    #[error("board has no empty cell")]
    BoardFull,
}
