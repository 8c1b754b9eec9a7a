//! Storage for the ticket board.
//!
//! - [`BoardStore`] -- the id → ticket map. It is deliberately unsynchronized:
//!   the board manager owns it and is the only code that ever touches it.
//! - [`record`] -- the flat `key=value` body of one exported ticket.
//! - [`archive`] -- export of a set of tickets into a timestamp-named
//!   directory, and import of such a directory.
//!
//! # Design Rules
//!
//! 1. The null id (zero) is never stored.
//! 2. At most one ticket per id; ids never change after insert.
//! 3. Export is best effort per record and never aborts half way.
//! 4. Import skips files it cannot attribute to a ticket instead of failing.

pub mod archive;
pub mod error;
pub mod memory;
pub mod record;

pub use archive::{export_tickets, import_tickets, ExportReport};
pub use error::{StoreError, StoreResult};
pub use memory::BoardStore;
