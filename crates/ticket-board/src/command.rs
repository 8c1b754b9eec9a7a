use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

use ticket_store::ExportReport;
use ticket_types::{CommandKind, Ticket, TicketId};

/// A request to the board manager.
///
/// Each variant carries exactly the payload and reply channel its kind
/// needs, so a command of an unknown kind cannot be built.
#[derive(Debug)]
pub enum Command {
    Add {
        ticket: Ticket,
        reply: oneshot::Sender<AddReply>,
    },
    /// Replies with the stored ticket, or [`Ticket::default`] (null id) if
    /// there is none.
    Get {
        id: TicketId,
        reply: oneshot::Sender<Ticket>,
    },
    /// Streams one [`ListReply::Item`] per ticket, then one [`ListReply::End`].
    List { reply: mpsc::Sender<ListReply> },
    Modify {
        ticket: Ticket,
        reply: oneshot::Sender<ModifyReply>,
    },
    /// Drains the board to disk. Usually sent without a reply channel.
    Export {
        reply: Option<oneshot::Sender<ExportReport>>,
    },
    /// Logs board statistics. Usually sent without a reply channel.
    Stat {
        reply: Option<oneshot::Sender<BoardStats>>,
    },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Add { .. } => CommandKind::Add,
            Self::Get { .. } => CommandKind::Get,
            Self::List { .. } => CommandKind::List,
            Self::Modify { .. } => CommandKind::Modify,
            Self::Export { .. } => CommandKind::Export,
            Self::Stat { .. } => CommandKind::Stat,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddReply {
    Added,
    /// The id was taken; carries the ticket already stored under it.
    Duplicate(Ticket),
    /// The ticket had the null id.
    InvalidId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifyReply {
    Modified,
    NotFound,
}

/// One message of a list stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListReply {
    Item(Ticket),
    /// End-of-stream sentinel; exactly one per complete stream.
    End,
}

/// Snapshot of the board manager's counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    pub tickets: usize,
    pub completed: usize,
    /// Commands processed, including the one that produced this snapshot.
    pub turns: u64,
    pub exports: u64,
}
