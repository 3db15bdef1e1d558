//! Serializable board snapshot, wholesale load and clear.
//!
//! A snapshot is the unit of persistence and of remote sync: notes, strokes,
//! viewport and jobs travel together so a reader never sees half of a batch.
//! Loading is lenient: any missing or malformed top-level field falls back to
//! its default, and malformed individual notes or strokes are skipped.

use super::{Board, BoardChange, ChangeOrigin};
use crate::types::{Job, Note, Stroke, default_jobs};
use crate::viewport::Viewport;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub strokes: Vec<Stroke>,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default = "default_jobs")]
    pub jobs: Vec<Job>,
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            strokes: Vec::new(),
            viewport: Viewport::default(),
            jobs: default_jobs(),
        }
    }
}

impl BoardSnapshot {
    /// Build a snapshot from an arbitrary JSON value, defaulting whatever is
    /// missing or unreadable. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let notes = lenient_list::<Note>(value.get("notes"), "notes");
        let strokes = lenient_list::<Stroke>(value.get("strokes"), "strokes");

        let viewport = match value.get("viewport") {
            None | Some(Value::Null) => Viewport::default(),
            Some(v) => serde_json::from_value::<Viewport>(v.clone())
                .map(Viewport::sanitized)
                .unwrap_or_else(|e| {
                    tracing::warn!("Invalid viewport in snapshot, using default: {}", e);
                    Viewport::default()
                }),
        };

        let mut jobs = lenient_list::<Job>(value.get("jobs"), "jobs");
        if jobs.is_empty() {
            jobs = default_jobs();
        }

        Self {
            notes,
            strokes,
            viewport,
            jobs,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty() && self.strokes.is_empty()
    }
}

fn lenient_list<T: DeserializeOwned>(value: Option<&Value>, field: &str) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match serde_json::from_value::<T>(item.clone()) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::warn!("Skipping malformed entry in `{}`: {}", field, e);
                    None
                }
            })
            .collect(),
        None | Some(Value::Null) => Vec::new(),
        Some(_) => {
            tracing::warn!("Field `{}` is not a list, using empty default", field);
            Vec::new()
        }
    }
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            notes: self.notes.clone(),
            strokes: self.strokes.clone(),
            viewport: self.viewport,
            jobs: self.jobs.clone(),
        }
    }

    /// Replace notes, strokes, viewport and jobs wholesale. Selected ids that
    /// no longer exist are dropped. Remote loads are tagged so they are never
    /// pushed back.
    pub fn load_board(&mut self, snapshot: BoardSnapshot, origin: ChangeOrigin) {
        let BoardSnapshot {
            notes,
            strokes,
            viewport,
            mut jobs,
        } = snapshot;

        if jobs.is_empty() {
            jobs = default_jobs();
        }

        tracing::info!(
            notes = notes.len(),
            strokes = strokes.len(),
            jobs = jobs.len(),
            ?origin,
            "load board"
        );

        self.notes = notes;
        for note in &mut self.notes {
            note.clamp_size();
        }
        self.strokes = strokes;
        self.viewport = viewport.sanitized();
        self.jobs = jobs;

        let notes = &self.notes;
        self.selection.retain(|id| notes.iter().any(|n| &n.id == id));

        self.emit_from(BoardChange::Loaded, origin);
    }

    /// Wipe notes and strokes and reset the viewport. Jobs are kept.
    pub fn clear_board(&mut self) {
        tracing::info!(
            notes = self.notes.len(),
            strokes = self.strokes.len(),
            "clear board"
        );
        self.notes.clear();
        self.strokes.clear();
        self.selection.clear();
        self.clipboard.clear();
        self.viewport = Viewport::default();
        self.emit(BoardChange::Cleared);
    }
}
