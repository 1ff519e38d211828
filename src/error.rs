use std::path::PathBuf;

/// Errors raised by board mutation, move validation and move selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("column {0} does not exist")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("no legal moves remain")]
    NoLegalMoves,

    #[error("game is already over")]
    GameOver,

    #[error("invalid board dimensions {rows}x{cols} with win length {win_length}")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        win_length: usize,
    },

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Errors that can occur while playing a match between two agents.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{agent} selected illegal action {action} (legal: {legal:?})")]
    IllegalAction {
        agent: String,
        action: usize,
        legal: Vec<usize>,
    },

    #[error("game error: {0}")]
    Game(#[from] GameError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
