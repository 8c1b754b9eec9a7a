//! Foundation types for the ticket board.
//!
//! Every other board crate depends on `ticket-types`.
//!
//! # Key Types
//!
//! - [`Ticket`] — one translation request and the translator's response
//! - [`TicketId`] — caller-supplied key; zero is the null id
//! - [`TicketFields`] — the mutable part of a ticket, replaced as a unit
//! - [`CommandKind`] — the closed set of board manager commands

pub mod command;
pub mod error;
pub mod id;
pub mod ticket;

pub use command::CommandKind;
pub use error::TypeError;
pub use id::TicketId;
pub use ticket::{Ticket, TicketFields};
