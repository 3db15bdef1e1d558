//! Active pointer bookkeeping.

use crate::types::{Point, PointerId};

/// Every pointer currently down, with its last known screen position.
/// Insertion order is kept so the two gesture pointers are deterministic.
#[derive(Debug, Default, Clone)]
pub struct PointerTracker {
    active: Vec<(PointerId, Point)>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite
    pub fn on_down(&mut self, id: PointerId, pos: Point) {
        match self.active.iter_mut().find(|(pid, _)| *pid == id) {
            Some(entry) => entry.1 = pos,
            None => self.active.push((id, pos)),
        }
    }

    /// Overwrite a known pointer. Returns false (and does nothing) for a
    /// pointer that is not down.
    pub fn on_move(&mut self, id: PointerId, pos: Point) -> bool {
        match self.active.iter_mut().find(|(pid, _)| *pid == id) {
            Some(entry) => {
                entry.1 = pos;
                true
            }
            None => false,
        }
    }

    /// Remove; returns the last position if the pointer was down
    pub fn on_up(&mut self, id: PointerId) -> Option<Point> {
        let index = self.active.iter().position(|(pid, _)| *pid == id)?;
        Some(self.active.remove(index).1)
    }

    pub fn count(&self) -> usize {
        self.active.len()
    }

    pub fn get(&self, id: PointerId) -> Option<Point> {
        self.active
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, pos)| *pos)
    }

    pub fn ids(&self) -> Vec<PointerId> {
        self.active.iter().map(|(id, _)| *id).collect()
    }

    pub fn values(&self) -> Vec<Point> {
        self.active.iter().map(|(_, pos)| *pos).collect()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}
