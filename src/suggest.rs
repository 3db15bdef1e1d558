//! AI brainstorm suggestions.
//!
//! The provider is an external collaborator; it runs on a worker thread and
//! its answer is applied back on the caller's thread through
//! [`SuggestionRunner::poll`] + [`apply_suggestion`]. Failures never reach the
//! board: they are logged and surface only as [`SuggestionStatus::Unavailable`].

use crate::board::Board;
use crate::constants::SUGGESTION_SEPARATOR;
use crate::types::NoteId;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Source of supplementary text for a note
pub trait SuggestionProvider: Send + Sync {
    fn suggest(&self, content: &str) -> anyhow::Result<String>;
}

impl<F> SuggestionProvider for F
where
    F: Fn(&str) -> anyhow::Result<String> + Send + Sync,
{
    fn suggest(&self, content: &str) -> anyhow::Result<String> {
        self(content)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SuggestionStatus {
    #[default]
    Idle,
    Working,
    /// Last request failed; cleared by the next request
    Unavailable(String),
}

#[derive(Debug)]
pub struct SuggestionResult {
    pub note_id: NoteId,
    pub outcome: Result<String, String>,
}

/// Clears the in-progress flag however the worker exits
struct CompletionGuard(Arc<AtomicBool>);

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs one suggestion request at a time on a background thread
pub struct SuggestionRunner {
    provider: Arc<dyn SuggestionProvider>,
    in_progress: Arc<AtomicBool>,
    tx: Sender<SuggestionResult>,
    rx: Receiver<SuggestionResult>,
    worker: Option<JoinHandle<()>>,
    last_error: Option<String>,
}

impl SuggestionRunner {
    pub fn new(provider: Arc<dyn SuggestionProvider>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            provider,
            in_progress: Arc::new(AtomicBool::new(false)),
            tx,
            rx,
            worker: None,
            last_error: None,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    pub fn status(&self) -> SuggestionStatus {
        if self.is_in_progress() {
            SuggestionStatus::Working
        } else if let Some(e) = &self.last_error {
            SuggestionStatus::Unavailable(e.clone())
        } else {
            SuggestionStatus::Idle
        }
    }

    /// Start a request for `note_id`. Returns false when one is already
    /// running or the content is blank.
    pub fn request(&mut self, note_id: NoteId, content: &str) -> bool {
        if content.trim().is_empty() {
            return false;
        }
        if self
            .in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Suggestion already in progress, ignoring request");
            return false;
        }
        self.last_error = None;
        self.reap_worker();

        let guard = CompletionGuard(self.in_progress.clone());
        let provider = self.provider.clone();
        let tx = self.tx.clone();
        let content = content.to_string();
        self.worker = Some(thread::spawn(move || {
            let outcome = match std::panic::catch_unwind(AssertUnwindSafe(|| {
                provider.suggest(&content)
            })) {
                Ok(Ok(text)) => Ok(text),
                Ok(Err(e)) => Err(format!("{:#}", e)),
                Err(_) => Err("suggestion provider panicked".to_string()),
            };
            drop(guard);
            let _ = tx.send(SuggestionResult { note_id, outcome });
        }));
        true
    }

    /// Finished results, without blocking
    pub fn poll(&mut self) -> Vec<SuggestionResult> {
        let results: Vec<_> = self.rx.try_iter().collect();
        self.record(&results);
        results
    }

    /// Block up to `timeout` for the next result
    pub fn wait(&mut self, timeout: Duration) -> Option<SuggestionResult> {
        let result = self.rx.recv_timeout(timeout).ok()?;
        self.record(std::slice::from_ref(&result));
        Some(result)
    }

    fn record(&mut self, results: &[SuggestionResult]) {
        for result in results {
            if let Err(e) = &result.outcome {
                tracing::warn!("Suggestion for note {} failed: {}", result.note_id, e);
                self.last_error = Some(e.clone());
            }
        }
        if !results.is_empty() {
            self.reap_worker();
        }
    }

    fn reap_worker(&mut self) {
        if self.worker.as_ref().is_some_and(|w| w.is_finished())
            && let Some(worker) = self.worker.take()
        {
            let _ = worker.join();
        }
    }
}

impl std::fmt::Debug for SuggestionRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionRunner")
            .field("in_progress", &self.is_in_progress())
            .field("last_error", &self.last_error)
            .finish()
    }
}

/// Append a successful suggestion to its note. Results for notes deleted in
/// the meantime are dropped.
pub fn apply_suggestion(board: &mut Board, result: &SuggestionResult) -> bool {
    let Ok(text) = &result.outcome else {
        return false;
    };
    let Some(note) = board.note(&result.note_id) else {
        tracing::debug!("Dropping suggestion for deleted note {}", result.note_id);
        return false;
    };
    let content = format!("{}{}{}", note.content, SUGGESTION_SEPARATOR, text);
    board.set_content(&result.note_id, content)
}
