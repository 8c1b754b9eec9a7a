use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid hex ticket id: {0}")]
    InvalidHex(String),

    #[error("invalid ticket id: {0}")]
    InvalidId(String),

    #[error("unknown command kind: {0}")]
    UnknownCommand(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
