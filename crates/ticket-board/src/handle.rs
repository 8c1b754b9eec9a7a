use tokio::sync::{mpsc, oneshot};

use ticket_store::ExportReport;
use ticket_types::{Ticket, TicketId};

use crate::command::{AddReply, BoardStats, Command, ListReply, ModifyReply};
use crate::error::{BoardError, Result};

/// Caller side of the board manager.
///
/// Cheap to clone; every clone feeds the same intake channel. The manager
/// stops once all handles are dropped.
#[derive(Clone, Debug)]
pub struct BoardHandle {
    commands: mpsc::Sender<Command>,
    list_buffer: usize,
}

impl BoardHandle {
    pub(crate) fn new(commands: mpsc::Sender<Command>) -> Self {
        Self {
            commands,
            list_buffer: 1,
        }
    }

    /// Use a larger per-call buffer for list streams.
    pub fn with_list_buffer(mut self, list_buffer: usize) -> Self {
        self.list_buffer = list_buffer.max(1);
        self
    }

    /// Submit a raw command. Callers own the reply side.
    pub async fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| BoardError::Closed)
    }

    /// Add a new ticket.
    pub async fn add(&self, ticket: Ticket) -> Result<()> {
        let id = ticket.id;
        let (reply, rx) = oneshot::channel();
        self.send(Command::Add { ticket, reply }).await?;
        match rx.await.map_err(|_| BoardError::Closed)? {
            AddReply::Added => Ok(()),
            AddReply::Duplicate(_) => Err(BoardError::Duplicate(id)),
            AddReply::InvalidId => Err(BoardError::InvalidId),
        }
    }

    /// Fetch a ticket. `Ok(None)` if no ticket has this id.
    pub async fn get(&self, id: TicketId) -> Result<Option<Ticket>> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Get { id, reply }).await?;
        let ticket = rx.await.map_err(|_| BoardError::Closed)?;
        Ok((!ticket.id.is_null()).then_some(ticket))
    }

    /// Replace the mutable fields of the ticket with `ticket.id`.
    pub async fn modify(&self, ticket: Ticket) -> Result<()> {
        let id = ticket.id;
        let (reply, rx) = oneshot::channel();
        self.send(Command::Modify { ticket, reply }).await?;
        match rx.await.map_err(|_| BoardError::Closed)? {
            ModifyReply::Modified => Ok(()),
            ModifyReply::NotFound => Err(BoardError::NotFound(id)),
        }
    }

    /// Start a list stream.
    pub async fn list_stream(&self) -> Result<ListStream> {
        let (reply, rx) = mpsc::channel(self.list_buffer);
        self.send(Command::List { reply }).await?;
        Ok(ListStream { rx, done: false })
    }

    /// Collect a full list stream.
    pub async fn list(&self) -> Result<Vec<Ticket>> {
        let mut stream = self.list_stream().await?;
        let mut tickets = Vec::new();
        while let Some(ticket) = stream.next().await? {
            tickets.push(ticket);
        }
        Ok(tickets)
    }

    /// Ask the manager to drain the board to disk without waiting.
    pub async fn export(&self) -> Result<()> {
        self.send(Command::Export { reply: None }).await
    }

    /// Drain the board to disk and wait for the outcome.
    pub async fn export_and_wait(&self) -> Result<ExportReport> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Export { reply: Some(reply) }).await?;
        rx.await.map_err(|_| BoardError::Closed)
    }

    /// Ask the manager to log its statistics without waiting.
    pub async fn stat(&self) -> Result<()> {
        self.send(Command::Stat { reply: None }).await
    }

    pub async fn stats(&self) -> Result<BoardStats> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Stat { reply: Some(reply) }).await?;
        rx.await.map_err(|_| BoardError::Closed)
    }

    /// Returns `true` once the manager has stopped.
    pub fn is_closed(&self) -> bool {
        self.commands.is_closed()
    }
}

/// Receiving end of one list command.
///
/// Must be read to the end (or dropped) promptly: the manager serves no
/// other caller while this stream has items pending.
#[derive(Debug)]
pub struct ListStream {
    rx: mpsc::Receiver<ListReply>,
    done: bool,
}

impl ListStream {
    /// Next ticket, or `Ok(None)` after the end marker.
    ///
    /// A stream that closes before its end marker yields
    /// [`BoardError::StreamTruncated`].
    pub async fn next(&mut self) -> Result<Option<Ticket>> {
        if self.done {
            return Ok(None);
        }
        match self.rx.recv().await {
            Some(ListReply::Item(ticket)) => Ok(Some(ticket)),
            Some(ListReply::End) => {
                self.done = true;
                Ok(None)
            }
            None => {
                self.done = true;
                Err(BoardError::StreamTruncated)
            }
        }
    }
}
