use std::path::PathBuf;

/// Why a column cannot take a token. Both are recoverable: the caller asks for
/// another column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("The specified column is out of bounds. Please enter another column.")]
    InvalidColumn,

    #[error("The specified column is already full. Please enter another number.")]
    ColumnFull,
}

/// Errors from driving a session turn by turn.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("the game is already over")]
    GameOver,
}

/// Errors raised by the interactive text shell.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("input closed before the game finished")]
    InputClosed,

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(
            MoveError::InvalidColumn.to_string(),
            "The specified column is out of bounds. Please enter another column."
        );
        assert_eq!(
            MoveError::ColumnFull.to_string(),
            "The specified column is already full. Please enter another number."
        );
    }

    #[test]
    fn test_turn_error_is_transparent_over_move_error() {
        let err = TurnError::from(MoveError::ColumnFull);
        assert_eq!(err.to_string(), MoveError::ColumnFull.to_string());
        assert_eq!(TurnError::GameOver.to_string(), "the game is already over");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("players.first must not be blank".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: players.first must not be blank"
        );
    }
}
