/// Errors from reading or mutating a packed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {column} does not exist")]
    InvalidColumn { column: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("row {row} of column {column} is at or above its height {height}")]
    OutOfRange { column: usize, row: usize, height: u8 },

    #[error("invalid board encoding: {0}")]
    InvalidEncoding(&'static str),
}

/// Errors from driving a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("game is already over")]
    GameOver,
}
