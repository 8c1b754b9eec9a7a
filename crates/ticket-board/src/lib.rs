//! Board manager for the ticket board.
//!
//! One task owns the ticket map. Every caller talks to it through a
//! [`BoardHandle`], which sends a [`Command`] on the shared intake channel and
//! waits on a private reply channel:
//!
//! ```text
//!  handler ─┐                     ┌──────────────────────┐
//!  handler ─┼── Command (mpsc) ──▶│ BoardManager          │
//!  handler ─┘                     │   owns BoardStore     │
//!      ▲                          │   one turn at a time  │
//!      └──── reply (oneshot, or ──┴──────────────────────┘
//!            mpsc + End for list)
//! ```
//!
//! A turn includes all of its replies, so a `get` sent after an `add` always
//! sees the new ticket.

pub mod command;
pub mod config;
pub mod error;
pub mod handle;
pub mod manager;

pub use command::{AddReply, BoardStats, Command, ListReply, ModifyReply};
pub use config::BoardConfig;
pub use error::BoardError;
pub use handle::{BoardHandle, ListStream};
pub use manager::BoardManager;
