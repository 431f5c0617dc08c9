use std::path::PathBuf;

/// Errors raised by a play session on the computer's turn.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("opponent selected illegal column {column} (legal: {legal:?})")]
    PolicyContract { column: usize, legal: Vec<usize> },

    #[error("it is not the computer's turn")]
    NotComputerTurn,
}

/// Errors produced while parsing a typed column choice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("not a column number: {0:?}")]
    NotANumber(String),

    #[error("column {0} is not available")]
    Unavailable(usize),
}

/// Errors that end an interactive session early.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
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
