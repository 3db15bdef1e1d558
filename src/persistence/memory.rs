//! In-memory backend. Clones share storage, so a test (or a second local
//! board) can keep a handle and play the remote side.

use super::BoardBackend;
use crate::board::BoardSnapshot;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Inner {
    stored: Option<BoardSnapshot>,
    push_count: usize,
    remote: VecDeque<BoardSnapshot>,
    fail_pushes: bool,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: BoardSnapshot) -> Self {
        let backend = Self::new();
        backend.inner.lock().stored = Some(snapshot);
        backend
    }

    pub fn stored(&self) -> Option<BoardSnapshot> {
        self.inner.lock().stored.clone()
    }

    pub fn push_count(&self) -> usize {
        self.inner.lock().push_count
    }

    /// Queue a snapshot as if another client had written it
    pub fn inject_remote(&self, snapshot: BoardSnapshot) {
        let mut inner = self.inner.lock();
        inner.stored = Some(snapshot.clone());
        inner.remote.push_back(snapshot);
    }

    /// Make subsequent pushes fail, simulating an unreachable backend
    pub fn set_failing(&self, failing: bool) {
        self.inner.lock().fail_pushes = failing;
    }
}

impl BoardBackend for MemoryBackend {
    fn load(&mut self) -> anyhow::Result<Option<BoardSnapshot>> {
        Ok(self.inner.lock().stored.clone())
    }

    fn push(&mut self, snapshot: &BoardSnapshot) -> anyhow::Result<()> {
        let mut inner = self.inner.lock();
        if inner.fail_pushes {
            anyhow::bail!("backend unavailable");
        }
        inner.stored = Some(snapshot.clone());
        inner.push_count += 1;
        Ok(())
    }

    /// Only the newest queued snapshot matters under last-write-wins
    fn poll_remote(&mut self) -> Option<BoardSnapshot> {
        let mut inner = self.inner.lock();
        let latest = inner.remote.pop_back();
        inner.remote.clear();
        latest
    }
}
