use std::path::PathBuf;

/// Errors raised by the grid engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board dimensions {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("no empty cell to spawn a tile into")]
    NoEmptyCell,

    #[error("merging two {tile} tiles overflows the tile type")]
    TileOverflow { tile: u32 },
}

/// Errors that end a game session.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
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
