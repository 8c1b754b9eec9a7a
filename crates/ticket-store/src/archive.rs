use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use ticket_types::Ticket;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::record;

/// Directory name format for one export, e.g. `20261019T141503.123456Z`.
pub const EXPORT_DIR_FORMAT: &str = "%Y%m%dT%H%M%S%.6fZ";

/// Outcome of one export.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// The directory the records were written to, if it could be created.
    pub directory: Option<PathBuf>,
    /// Records written successfully.
    pub written: usize,
    /// Records that could not be written.
    pub failed: usize,
}

impl ExportReport {
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Write every ticket to a fresh timestamp-named directory under `root`.
///
/// Best effort per record: a failed write is logged and counted, and the
/// remaining tickets are still written.
pub fn export_tickets(root: &Path, tickets: &[Ticket]) -> ExportReport {
    export_tickets_at(root, tickets, Utc::now())
}

/// [`export_tickets`] with an explicit timestamp for the directory name.
pub fn export_tickets_at(root: &Path, tickets: &[Ticket], at: DateTime<Utc>) -> ExportReport {
    let dir = match create_export_dir(root, at) {
        Ok(dir) => dir,
        Err(e) => {
            warn!(root = %root.display(), "cannot create export directory: {e}");
            return ExportReport {
                directory: None,
                written: 0,
                failed: tickets.len(),
            };
        }
    };

    let mut report = ExportReport {
        directory: Some(dir.clone()),
        ..Default::default()
    };
    for ticket in tickets {
        if ticket.has_multiline_value() {
            warn!(id = %ticket.id, "ticket value contains a line break; record will not read back intact");
        }
        let path = dir.join(record::file_name(ticket.id));
        match fs::write(&path, record::encode(ticket)) {
            Ok(()) => {
                debug!(path = %path.display(), "exported ticket");
                report.written += 1;
            }
            Err(e) => {
                warn!(path = %path.display(), "failed to export ticket: {e}");
                report.failed += 1;
            }
        }
    }

    info!(
        dir = %dir.display(),
        written = report.written,
        failed = report.failed,
        "export finished"
    );
    report
}

/// Create `root/<timestamp>`, adding a `-N` suffix if that name is taken.
fn create_export_dir(root: &Path, at: DateTime<Utc>) -> io::Result<PathBuf> {
    fs::create_dir_all(root)?;
    let stamp = at.format(EXPORT_DIR_FORMAT).to_string();
    let mut candidate = root.join(&stamp);
    let mut attempt = 0u32;
    loop {
        match fs::create_dir(&candidate) {
            Ok(()) => return Ok(candidate),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && attempt < 1000 => {
                attempt += 1;
                candidate = root.join(format!("{stamp}-{attempt}"));
            }
            Err(e) => return Err(e),
        }
    }
}

/// Read every ticket record in `dir`.
///
/// Entries that are not files, cannot be read, or whose names do not carry a
/// non-null ticket id, are skipped with a warning. Bodies that are not valid
/// UTF-8 are decoded lossily.
pub fn import_tickets(dir: &Path) -> StoreResult<Vec<Ticket>> {
    if !dir.is_dir() {
        return Err(StoreError::ImportDirNotFound(dir.to_path_buf()));
    }

    let mut tickets = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), "skipping unreadable entry: {e}");
                continue;
            }
        };
        match entry.file_type() {
            Ok(kind) if kind.is_file() => {}
            Ok(_) => continue,
            Err(e) => {
                warn!(path = %entry.path().display(), "skipping entry: {e}");
                continue;
            }
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        let id = match record::parse_file_name(&name) {
            Ok(id) if !id.is_null() => id,
            Ok(_) => {
                warn!(file = %name, "skipping record with null ticket id");
                continue;
            }
            Err(e) => {
                warn!(file = %name, "skipping file: {e}");
                continue;
            }
        };
        let body = match fs::read(entry.path()) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(file = %name, "skipping unreadable record: {e}");
                continue;
            }
        };
        tickets.push(record::decode(id, &String::from_utf8_lossy(&body)));
    }

    info!(dir = %dir.display(), count = tickets.len(), "imported tickets");
    Ok(tickets)
}
