//! Error types for the engine, its configuration, and the game manager.

use std::path::PathBuf;

use crate::state::GameStatus;

/// Errors returned when a move is rejected.
///
/// A rejected move never touches the game state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column out of range (board has {width} columns)")]
    InvalidColumn { width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("game is already over ({status})")]
    GameAlreadyOver { status: GameStatus },
}

/// Errors that can occur when loading or validating configuration.
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

/// Errors returned by [`GameManager`](crate::state::GameManager).
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("game {0} already exists")]
    DuplicateGame(String),

    #[error("no game with id {0}")]
    UnknownGame(String),

    #[error("invalid game config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Move(#[from] MoveError),
}
