use std::path::PathBuf;

/// Errors from applying a move to a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("coordinate ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("a piece at ({row}, {col}) would not rest on the stack in its column")]
    FloatingPiece { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        let err = MoveError::Occupied { row: 1, col: 2 };
        assert_eq!(err.to_string(), "cell (1, 2) is already occupied");

        let err = MoveError::ColumnFull(3);
        assert_eq!(err.to_string(), "column 3 is full");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("search_depth must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: search_depth must be > 0"
        );
    }
}
