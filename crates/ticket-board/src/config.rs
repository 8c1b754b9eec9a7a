use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the [`BoardManager`](crate::BoardManager).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Capacity of the shared command intake channel.
    pub intake_capacity: usize,
    /// Capacity of each per-call list stream. `1` is the closest tokio gets
    /// to an unbuffered hand-off.
    pub list_buffer: usize,
    /// Maximum tickets sent per list stream. `None` sends all of them.
    pub list_limit: Option<usize>,
    /// Give up on a list stream whose reader has not taken an item within
    /// this many milliseconds. `None` waits forever.
    pub reply_timeout_ms: Option<u64>,
    /// Directory under which each export creates its timestamped directory.
    pub export_root: PathBuf,
}

impl BoardConfig {
    pub fn reply_timeout(&self) -> Option<Duration> {
        self.reply_timeout_ms.map(Duration::from_millis)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            intake_capacity: 64,
            list_buffer: 1,
            list_limit: None,
            reply_timeout_ms: None,
            export_root: PathBuf::from("."),
        }
    }
}
