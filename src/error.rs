use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KantanError>;

#[derive(Debug, Error)]
pub enum KantanError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed board file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Card index {index} out of bounds (board has {len} cards)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Card title cannot be empty")]
    EmptyTitle,

    #[error("Invalid board name: {0:?}")]
    InvalidBoardName(String),

    #[error("Board \"{0}\" not found. Run 'kantan init -n {0}' first.")]
    BoardNotFound(String),

    #[error("Board \"{0}\" already exists.")]
    BoardAlreadyExists(String),

    #[error("Config file not found. Run 'kantan init' first.")]
    NotInitialized,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse error classes, used by callers that map errors to codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Parse,
    Index,
    Other,
}

impl KantanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } => ErrorKind::Io,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::IndexOutOfRange { .. } | Self::CardNotFound(_) => ErrorKind::Index,
            _ => ErrorKind::Other,
        }
    }
}
