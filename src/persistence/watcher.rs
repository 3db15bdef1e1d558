//! File watcher for the snapshot file.
//!
//! Watches the snapshot's parent directory rather than the file itself:
//! atomic writes replace the file by rename, which would orphan a watch on
//! the old inode.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, TryRecvError, channel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WatchEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

pub struct SnapshotWatcher {
    path: PathBuf,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl SnapshotWatcher {
    pub fn new(path: PathBuf) -> notify::Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })?;
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;
        Ok(Self {
            path,
            rx,
            _watcher: watcher,
        })
    }

    /// Drain pending notifications and return the most recent one that
    /// concerns the snapshot file
    pub fn poll(&mut self) -> Option<WatchEvent> {
        let mut latest = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if !event.paths.iter().any(|p| p.file_name() == self.path.file_name()) {
                        continue;
                    }
                    latest = match event.kind {
                        EventKind::Create(_) => Some(WatchEvent::Created),
                        EventKind::Modify(_) => Some(WatchEvent::Modified),
                        EventKind::Remove(_) => Some(WatchEvent::Deleted),
                        _ => latest,
                    };
                }
                Ok(Err(e)) => latest = Some(WatchEvent::Error(e.to_string())),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        latest
    }
}

impl std::fmt::Debug for SnapshotWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotWatcher")
            .field("path", &self.path)
            .finish()
    }
}
