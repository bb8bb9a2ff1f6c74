use std::path::PathBuf;

use crate::game::PlayerId;

/// Errors raised while setting up a game session. None of these leave a
/// game behind.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{player} color '{color}' is not a valid color")]
    InvalidColor { player: PlayerId, color: String },

    #[error("Please enter 2 valid different colors! (both players chose '{0}')")]
    DuplicateColor(String),

    #[error("board must be at least 1x1 (got {height}x{width})")]
    InvalidDimensions { height: usize, width: usize },

    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ConfigError {
    /// True for the errors that come from the players/board settings
    /// themselves rather than from reading the config file.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            ConfigError::InvalidColor { .. }
                | ConfigError::DuplicateColor(_)
                | ConfigError::InvalidDimensions { .. }
        )
    }
}

/// Reasons a move is rejected. A rejected move never mutates the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    OutOfRange { column: usize, width: usize },

    #[error("column is full")]
    ColumnFull,

    #[error("game is over")]
    GameOver,
}
