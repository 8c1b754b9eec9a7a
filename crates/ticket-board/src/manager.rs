use std::path::PathBuf;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use ticket_store::{archive, BoardStore, ExportReport, StoreError};
use ticket_types::{Ticket, TicketFields, TicketId};

use crate::command::{AddReply, BoardStats, Command, ListReply, ModifyReply};
use crate::config::BoardConfig;
use crate::handle::BoardHandle;

/// Sole owner of the ticket map.
///
/// The manager takes one [`Command`] at a time off its intake channel and
/// runs it to completion, replies included, before taking the next. That
/// total order of turns is what keeps the unsynchronized [`BoardStore`]
/// consistent.
///
/// A caller that stops reading a list stream stalls every other caller until
/// it resumes or drops the stream, unless `reply_timeout_ms` is set.
pub struct BoardManager {
    store: BoardStore,
    commands: mpsc::Receiver<Command>,
    config: BoardConfig,
    turns: u64,
    exports: u64,
}

impl BoardManager {
    /// Create a manager over `store` and the caller handle that feeds it.
    pub fn new(store: BoardStore, config: BoardConfig) -> (Self, BoardHandle) {
        let (tx, rx) = mpsc::channel(config.intake_capacity.max(1));
        let handle = BoardHandle::new(tx).with_list_buffer(config.list_buffer);
        let manager = Self {
            store,
            commands: rx,
            config,
            turns: 0,
            exports: 0,
        };
        (manager, handle)
    }

    /// Spawn the manager on the current tokio runtime.
    pub fn spawn(store: BoardStore, config: BoardConfig) -> (BoardHandle, JoinHandle<()>) {
        let (manager, handle) = Self::new(store, config);
        let task = tokio::spawn(manager.run());
        (handle, task)
    }

    /// Process commands until every [`BoardHandle`] has been dropped.
    pub async fn run(mut self) {
        info!(tickets = self.store.len(), "board manager started");
        while let Some(command) = self.commands.recv().await {
            self.turns += 1;
            debug!(kind = %command.kind(), turn = self.turns, "board manager turn");
            self.handle(command).await;
        }
        info!(tickets = self.store.len(), turns = self.turns, "board manager stopped");
    }

    async fn handle(&mut self, command: Command) {
        match command {
            Command::Add { ticket, reply } => {
                let answer = self.add(ticket);
                send_reply(reply, answer);
            }
            Command::Get { id, reply } => {
                let answer = self.get(id);
                send_reply(reply, answer);
            }
            Command::List { reply } => self.list(reply).await,
            Command::Modify { ticket, reply } => {
                let answer = self.modify(ticket);
                send_reply(reply, answer);
            }
            Command::Export { reply } => {
                let report = self.export().await;
                if let Some(reply) = reply {
                    send_reply(reply, report);
                }
            }
            Command::Stat { reply } => {
                let stats = self.stats();
                info!(
                    tickets = stats.tickets,
                    completed = stats.completed,
                    turns = stats.turns,
                    exports = stats.exports,
                    "board stats"
                );
                if let Some(reply) = reply {
                    send_reply(reply, stats);
                }
            }
        }
    }

    fn add(&mut self, ticket: Ticket) -> AddReply {
        let id = ticket.id;
        match self.store.insert(ticket) {
            Ok(()) => {
                debug!(%id, tickets = self.store.len(), "added ticket");
                AddReply::Added
            }
            Err(StoreError::DuplicateKey(_)) => {
                debug!(%id, "rejecting duplicate ticket");
                AddReply::Duplicate(self.store.lookup(id).cloned().unwrap_or_default())
            }
            Err(e) => {
                debug!(%id, "rejecting ticket: {e}");
                AddReply::InvalidId
            }
        }
    }

    fn get(&self, id: TicketId) -> Ticket {
        match self.store.lookup(id) {
            Some(ticket) => ticket.clone(),
            None => {
                debug!(%id, "ticket not found");
                Ticket::default()
            }
        }
    }

    async fn list(&self, reply: mpsc::Sender<ListReply>) {
        let limit = self.config.list_limit.unwrap_or(usize::MAX);
        let mut sent = 0usize;
        for ticket in self.store.enumerate().take(limit) {
            if !self.send_item(&reply, ListReply::Item(ticket.clone())).await {
                return;
            }
            sent += 1;
        }
        if self.send_item(&reply, ListReply::End).await {
            debug!(sent, "done listing");
        }
    }

    /// Send one list message. Returns `false` if the stream was abandoned.
    async fn send_item(&self, reply: &mpsc::Sender<ListReply>, item: ListReply) -> bool {
        let result = match self.config.reply_timeout() {
            Some(limit) => match tokio::time::timeout(limit, reply.send(item)).await {
                Ok(sent) => sent.is_ok(),
                Err(_) => {
                    warn!(timeout = ?limit, "list reader too slow; abandoning stream");
                    return false;
                }
            },
            None => reply.send(item).await.is_ok(),
        };
        if !result {
            debug!("list reader went away");
        }
        result
    }

    fn modify(&mut self, ticket: Ticket) -> ModifyReply {
        let id = ticket.id;
        match self.store.update(id, TicketFields::from(ticket)) {
            Ok(()) => {
                debug!(%id, "modified ticket");
                ModifyReply::Modified
            }
            Err(e) => {
                debug!(%id, "modify rejected: {e}");
                ModifyReply::NotFound
            }
        }
    }

    /// Drain the whole board to disk. The store is empty afterwards even if
    /// some records failed to write.
    async fn export(&mut self) -> ExportReport {
        let tickets = self.store.drain_all();
        self.exports += 1;
        let root: PathBuf = self.config.export_root.clone();
        let count = tickets.len();
        let report = tokio::task::spawn_blocking(move || archive::export_tickets(&root, &tickets))
            .await
            .unwrap_or_else(|e| {
                warn!("export task failed: {e}");
                ExportReport {
                    directory: None,
                    written: 0,
                    failed: count,
                }
            });
        if !report.is_complete() {
            warn!(failed = report.failed, "export lost tickets");
        }
        report
    }

    fn stats(&self) -> BoardStats {
        BoardStats {
            tickets: self.store.len(),
            completed: self.store.completed(),
            turns: self.turns,
            exports: self.exports,
        }
    }
}

/// Reply on a oneshot; a caller that has gone away is not an error.
fn send_reply<T>(reply: oneshot::Sender<T>, value: T) {
    if reply.send(value).is_err() {
        debug!("caller dropped its reply channel");
    }
}
