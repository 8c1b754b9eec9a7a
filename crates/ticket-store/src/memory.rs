use std::collections::HashMap;

use ticket_types::{Ticket, TicketFields, TicketId};
use tracing::warn;

use crate::error::{StoreError, StoreResult};

/// In-memory map from ticket id to ticket.
///
/// Not synchronized. Every method takes `&self` or `&mut self` and the board
/// manager is the only owner, so there is never more than one thread of
/// control inside the map.
#[derive(Default)]
pub struct BoardStore {
    tickets: HashMap<TicketId, Ticket>,
}

impl BoardStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            tickets: HashMap::new(),
        }
    }

    /// Build a store from previously imported tickets.
    ///
    /// Null ids and repeated ids are skipped; the first ticket for an id wins.
    pub fn from_tickets(tickets: impl IntoIterator<Item = Ticket>) -> Self {
        let mut store = Self::new();
        for ticket in tickets {
            let id = ticket.id;
            if let Err(e) = store.insert(ticket) {
                warn!(%id, "skipping ticket on load: {e}");
            }
        }
        store
    }

    /// Number of tickets currently stored.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Insert a new ticket. Fails if its id is null or already present.
    pub fn insert(&mut self, ticket: Ticket) -> StoreResult<()> {
        if ticket.id.is_null() {
            return Err(StoreError::NullTicketId);
        }
        if self.tickets.contains_key(&ticket.id) {
            return Err(StoreError::DuplicateKey(ticket.id));
        }
        self.tickets.insert(ticket.id, ticket);
        Ok(())
    }

    pub fn lookup(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.get(&id)
    }

    /// Replace the mutable fields of an existing ticket in place.
    pub fn update(&mut self, id: TicketId, fields: TicketFields) -> StoreResult<()> {
        let ticket = self.tickets.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        ticket.apply(fields);
        Ok(())
    }

    /// All stored tickets, in no particular order.
    pub fn enumerate(&self) -> impl Iterator<Item = &Ticket> + '_ {
        self.tickets.values()
    }

    /// Remove and return every ticket, leaving the store empty.
    pub fn drain_all(&mut self) -> Vec<Ticket> {
        self.tickets.drain().map(|(_, ticket)| ticket).collect()
    }

    /// Number of tickets marked complete.
    pub fn completed(&self) -> usize {
        self.tickets.values().filter(|t| t.complete).count()
    }
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("ticket_count", &self.len())
            .finish()
    }
}
