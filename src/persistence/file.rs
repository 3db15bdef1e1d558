//! Snapshot file on local disk.
//!
//! Writes are atomic (temp file in the same directory, then rename). Changes
//! made to the file by another process surface through `poll_remote`; our own
//! writes are recognised by content and never echoed back.

use super::{BoardBackend, SnapshotWatcher, WatchEvent};
use crate::board::BoardSnapshot;
use crate::constants::SNAPSHOT_FILE_NAME;
use anyhow::Context as _;
use std::io::Write as _;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    watcher: Option<SnapshotWatcher>,
    /// Exact bytes of our last write, for echo suppression
    last_written: Option<String>,
}

impl FileBackend {
    /// Backend storing `board.json` inside `dir`, creating `dir` if needed.
    /// Watching is best effort; without it remote edits are not picked up but
    /// everything else works.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        let path = dir.as_ref().join(SNAPSHOT_FILE_NAME);
        let watcher = match std::fs::create_dir_all(dir.as_ref())
            .map_err(anyhow::Error::from)
            .and_then(|()| SnapshotWatcher::new(path.clone()).map_err(anyhow::Error::from))
        {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                tracing::warn!("Snapshot watcher unavailable for {}: {}", path.display(), e);
                None
            }
        };
        Self {
            path,
            watcher,
            last_written: None,
        }
    }

    /// Backend without a file watcher
    pub fn unwatched(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SNAPSHOT_FILE_NAME),
            watcher: None,
            last_written: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_snapshot(&self) -> anyhow::Result<Option<(String, BoardSnapshot)>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        let value: serde_json::Value = serde_json::from_str(&contents)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(Some((contents, BoardSnapshot::from_value(&value))))
    }
}

impl BoardBackend for FileBackend {
    fn load(&mut self) -> anyhow::Result<Option<BoardSnapshot>> {
        let Some((contents, snapshot)) = self.read_snapshot()? else {
            return Ok(None);
        };
        tracing::info!("Loaded board from {}", self.path.display());
        self.last_written = Some(contents);
        Ok(Some(snapshot))
    }

    fn push(&mut self, snapshot: &BoardSnapshot) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;

        tracing::debug!(
            notes = snapshot.notes.len(),
            strokes = snapshot.strokes.len(),
            "Saved board to {}",
            self.path.display()
        );
        self.last_written = Some(json);
        Ok(())
    }

    fn poll_remote(&mut self) -> Option<BoardSnapshot> {
        let event = self.watcher.as_mut()?.poll()?;
        match event {
            WatchEvent::Created | WatchEvent::Modified => {}
            WatchEvent::Deleted => {
                tracing::warn!("Board file deleted: {}", self.path.display());
                return None;
            }
            WatchEvent::Error(e) => {
                tracing::error!("Board watch error: {}", e);
                return None;
            }
        }

        match self.read_snapshot() {
            Ok(Some((contents, _))) if self.last_written.as_deref() == Some(contents.as_str()) => {
                None
            }
            Ok(Some((contents, snapshot))) => {
                tracing::info!("Board file changed externally, reloading");
                self.last_written = Some(contents);
                Some(snapshot)
            }
            Ok(None) => None,
            Err(e) => {
                // Likely caught mid-write by another process; the next
                // notification will carry the finished file
                tracing::debug!("Ignoring unreadable board file: {:#}", e);
                None
            }
        }
    }
}
