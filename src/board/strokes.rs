use super::{Board, BoardChange};
use crate::types::{Stroke, StrokeId};

impl Board {
    pub fn stroke(&self, id: &StrokeId) -> Option<&Stroke> {
        self.strokes.iter().find(|s| &s.id == id)
    }

    /// Commit a finished stroke. Strokes are immutable once added.
    pub fn add_stroke(&mut self, stroke: Stroke) -> StrokeId {
        let id = stroke.id.clone();
        tracing::debug!(stroke = %id, points = stroke.points.len(), "add stroke");
        self.strokes.push(stroke);
        self.emit(BoardChange::Strokes);
        id
    }

    pub fn delete_stroke(&mut self, id: &StrokeId) -> bool {
        let before = self.strokes.len();
        self.strokes.retain(|s| &s.id != id);
        if self.strokes.len() == before {
            return false;
        }
        tracing::debug!(stroke = %id, "delete stroke");
        self.emit(BoardChange::Strokes);
        true
    }
}
