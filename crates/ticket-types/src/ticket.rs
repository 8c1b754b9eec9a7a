use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::id::TicketId;

/// A single request for translation and the translator's response.
///
/// Decoding is lenient the same way the board's HTTP clients expect: field
/// names are camelCase but the capitalized forms are accepted too, and any
/// missing field takes its empty default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Ticket {
    #[serde(alias = "Id")]
    pub id: TicketId,
    #[serde(alias = "MessageType")]
    pub message_type: String,
    #[serde(alias = "Message")]
    pub message: String,
    #[serde(alias = "ResponseType")]
    pub response_type: String,
    #[serde(alias = "Response")]
    pub response: String,
    #[serde(alias = "Complete")]
    pub complete: bool,
}

impl Ticket {
    /// A fresh, incomplete ticket carrying only the inbound payload.
    pub fn new(
        id: impl Into<TicketId>,
        message_type: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            message_type: message_type.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    /// The mutable part of this ticket.
    pub fn fields(&self) -> TicketFields {
        TicketFields {
            message_type: self.message_type.clone(),
            message: self.message.clone(),
            response_type: self.response_type.clone(),
            response: self.response.clone(),
            complete: self.complete,
        }
    }

    /// Replace all mutable fields at once. The id is left untouched.
    pub fn apply(&mut self, fields: TicketFields) {
        self.message_type = fields.message_type;
        self.message = fields.message;
        self.response_type = fields.response_type;
        self.response = fields.response;
        self.complete = fields.complete;
    }

    /// Returns `true` if any field value contains a line break.
    pub fn has_multiline_value(&self) -> bool {
        [
            &self.message_type,
            &self.message,
            &self.response_type,
            &self.response,
        ]
        .iter()
        .any(|v| v.contains('\n') || v.contains('\r'))
    }

    pub fn to_json_bytes(&self) -> Result<Vec<u8>, TypeError> {
        serde_json::to_vec(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, TypeError> {
        serde_json::from_slice(bytes).map_err(|e| TypeError::Serialization(e.to_string()))
    }
}

/// The five fields a modify replaces in one step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketFields {
    pub message_type: String,
    pub message: String,
    pub response_type: String,
    pub response: String,
    pub complete: bool,
}

impl From<Ticket> for TicketFields {
    fn from(ticket: Ticket) -> Self {
        Self {
            message_type: ticket.message_type,
            message: ticket.message,
            response_type: ticket.response_type,
            response: ticket.response,
            complete: ticket.complete,
        }
    }
}
