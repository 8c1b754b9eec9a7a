//! Flat `key=value` record format for one ticket.
//!
//! ```text
//! messageType=binary
//! message=AB12
//! responseType=binary
//! response=CD34
//! complete=true
//! ```
//!
//! The id is not part of the body; it lives in the file name
//! (`ticket#<hex-id>`). Values are not escaped. Decoding splits each line on
//! its first `=` so values may contain `=`, but a value containing a line
//! break cannot be read back.

use ticket_types::{Ticket, TicketId};

use crate::error::{StoreError, StoreResult};

/// Prefix of every record file name.
pub const FILE_PREFIX: &str = "ticket";

/// Separator between the prefix and the hex id.
pub const NAME_SEPARATOR: char = '#';

const KEY_MESSAGE_TYPE: &str = "messageType";
const KEY_MESSAGE: &str = "message";
const KEY_RESPONSE_TYPE: &str = "responseType";
const KEY_RESPONSE: &str = "response";
const KEY_COMPLETE: &str = "complete";

/// File name for a ticket's record.
pub fn file_name(id: TicketId) -> String {
    format!("{FILE_PREFIX}{NAME_SEPARATOR}{}", id.to_hex())
}

/// Recover the ticket id from a record file name.
pub fn parse_file_name(name: &str) -> StoreResult<TicketId> {
    let hex = name
        .split(NAME_SEPARATOR)
        .nth(1)
        .ok_or_else(|| StoreError::BadFileName(name.to_string()))?;
    TicketId::from_hex(hex).map_err(|_| StoreError::BadFileName(name.to_string()))
}

/// Render the body of a ticket record.
pub fn encode(ticket: &Ticket) -> String {
    format!(
        "{KEY_MESSAGE_TYPE}={}\n{KEY_MESSAGE}={}\n{KEY_RESPONSE_TYPE}={}\n{KEY_RESPONSE}={}\n{KEY_COMPLETE}={}\n",
        ticket.message_type, ticket.message, ticket.response_type, ticket.response, ticket.complete,
    )
}

/// Parse a record body into a ticket with the given id.
///
/// Unknown keys and lines without `=` are ignored. A `complete` value that is
/// not a boolean reads as `false`.
pub fn decode(id: TicketId, body: &str) -> Ticket {
    let mut ticket = Ticket {
        id,
        ..Default::default()
    };
    for line in body.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        match key {
            KEY_MESSAGE_TYPE => ticket.message_type = value.to_string(),
            KEY_MESSAGE => ticket.message = value.to_string(),
            KEY_RESPONSE_TYPE => ticket.response_type = value.to_string(),
            KEY_RESPONSE => ticket.response = value.to_string(),
            KEY_COMPLETE => ticket.complete = value.parse().unwrap_or(false),
            _ => {}
        }
    }
    ticket
}
