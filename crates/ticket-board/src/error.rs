use ticket_types::TicketId;

/// Errors seen by callers of the board manager.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BoardError {
    /// `add` against an id that is already stored.
    #[error("ticket {0} already exists")]
    Duplicate(TicketId),

    /// `get` or `modify` against an id that is not stored.
    #[error("ticket {0} not found")]
    NotFound(TicketId),

    /// The null id (zero) was used as a key.
    #[error("ticket id must not be zero")]
    InvalidId,

    /// The board manager has stopped; its intake or a reply channel is closed.
    #[error("board manager is not running")]
    Closed,

    /// A list stream ended without its end-of-stream marker.
    #[error("list stream ended before its end marker")]
    StreamTruncated,
}

/// Convenience alias used throughout the board crate.
pub type Result<T> = std::result::Result<T, BoardError>;
