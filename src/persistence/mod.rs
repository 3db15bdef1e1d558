//! Persistence collaborator - where board snapshots are stored and synced.
//!
//! The store never talks to a backend directly. A session subscribes to board
//! events, marks the [`SyncScheduler`] dirty on every local durable change,
//! and pushes one whole [`BoardSnapshot`] once the debounce window has been
//! quiet. Remote snapshots come back through [`BoardBackend::poll_remote`] and
//! are applied as a wholesale, remote-tagged load (last write wins).

mod file;
mod memory;
mod watcher;

pub use file::FileBackend;
pub use memory::MemoryBackend;
pub use watcher::{SnapshotWatcher, WatchEvent};

use crate::board::BoardSnapshot;
use std::time::{Duration, Instant};

/// Storage for board snapshots
pub trait BoardBackend {
    /// Last stored snapshot, `None` when nothing has been stored yet
    fn load(&mut self) -> anyhow::Result<Option<BoardSnapshot>>;

    /// Store a full snapshot, replacing the previous one
    fn push(&mut self, snapshot: &BoardSnapshot) -> anyhow::Result<()>;

    /// A snapshot written by someone else since the last poll
    fn poll_remote(&mut self) -> Option<BoardSnapshot>;
}

/// Sync indicator shown next to the board title
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SyncStatus {
    #[default]
    Idle,
    /// Local changes waiting for the debounce window to close
    Pending,
    Synced,
    /// Last push failed; the next change retries
    NotSynced(String),
}

/// Trailing-edge debounce for snapshot pushes. Every change restarts the
/// window, so a burst of edits produces a single push.
#[derive(Debug)]
pub struct SyncScheduler {
    debounce: Duration,
    deadline: Option<Instant>,
    status: SyncStatus,
}

impl SyncScheduler {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            deadline: None,
            status: SyncStatus::Idle,
        }
    }

    pub fn mark_dirty(&mut self, now: Instant) {
        self.deadline = Some(now + self.debounce);
        self.status = SyncStatus::Pending;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True once the window has closed; the caller should push now
    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Record the outcome of a push and close the window
    pub fn complete(&mut self, result: &anyhow::Result<()>) {
        self.deadline = None;
        self.status = match result {
            Ok(()) => SyncStatus::Synced,
            Err(e) => SyncStatus::NotSynced(e.to_string()),
        };
    }

    /// Forget pending work without pushing (e.g. superseded by a remote load)
    pub fn cancel(&mut self) {
        self.deadline = None;
        if self.status == SyncStatus::Pending {
            self.status = SyncStatus::Idle;
        }
    }

    pub fn status(&self) -> &SyncStatus {
        &self.status
    }
}
