//! Task-completion summary and note search for the dashboard overlay.

use crate::board::Board;
use crate::types::{Job, JobId, Note};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobProgress {
    pub job_id: JobId,
    pub name: String,
    pub total: usize,
    pub done: usize,
    /// Rounded completion, 0 when the job has no tasks
    pub percent: u32,
}

impl JobProgress {
    fn new(job: &Job) -> Self {
        Self {
            job_id: job.id.clone(),
            name: job.name.clone(),
            total: 0,
            done: 0,
            percent: 0,
        }
    }
}

fn percent(done: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u32
}

/// One entry per job, in job order. Notes with dangling job references count
/// towards the default job.
pub fn job_progress(board: &Board) -> Vec<JobProgress> {
    let mut rows: Vec<JobProgress> = board.jobs().iter().map(JobProgress::new).collect();
    for note in board.notes().iter().filter(|n| n.is_task) {
        let Some(job) = board.resolve_job(&note.job) else {
            continue;
        };
        if let Some(row) = rows.iter_mut().find(|r| r.job_id == job.id) {
            row.total += 1;
            if note.is_done_task() {
                row.done += 1;
            }
        }
    }
    for row in &mut rows {
        row.percent = percent(row.done, row.total);
    }
    rows
}

/// Board-wide task totals as `(done, total, percent)`
pub fn overall_progress(board: &Board) -> (usize, usize, u32) {
    let (done, total) = board
        .notes()
        .iter()
        .filter(|n| n.is_task)
        .fold((0, 0), |(done, total), n| {
            (done + usize::from(n.is_done_task()), total + 1)
        });
    (done, total, percent(done, total))
}

/// Case-insensitive match on note content or job name. Tasks come first;
/// within each group board order is kept. An empty query matches everything.
pub fn search_notes<'a>(board: &'a Board, query: &str) -> Vec<&'a Note> {
    let needle = query.trim().to_lowercase();
    let mut hits: Vec<&Note> = board
        .notes()
        .iter()
        .filter(|note| {
            if needle.is_empty() {
                return true;
            }
            let job_name = board
                .resolve_job(&note.job)
                .map(|j| j.name.to_lowercase())
                .unwrap_or_default();
            note.content.to_lowercase().contains(&needle) || job_name.contains(&needle)
        })
        .collect();
    hits.sort_by_key(|note| !note.is_task);
    hits
}
