use std::path::PathBuf;

use ticket_types::TicketId;

/// Errors from board store and export/import operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A ticket with this id is already stored.
    #[error("duplicate ticket id: {0}")]
    DuplicateKey(TicketId),

    /// No ticket with this id is stored.
    #[error("ticket not found: {0}")]
    NotFound(TicketId),

    /// Attempted to store a ticket with the null (zero) id.
    #[error("cannot store ticket with null id")]
    NullTicketId,

    /// A record file name does not carry a ticket id.
    #[error("not a ticket record file name: {0}")]
    BadFileName(String),

    /// Import source is missing or not a directory.
    #[error("import directory not found: {0}")]
    ImportDirNotFound(PathBuf),

    /// I/O error from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
