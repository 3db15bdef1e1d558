//! Jobs and the default-job rule.
//!
//! The default job is always the first job in the list. It is the single
//! fallback used when creating notes, when a note references a job that no
//! longer exists, and when a job is deleted out from under its notes.

use super::{Board, BoardChange};
use crate::constants::FALLBACK_JOB_ID;
use crate::error::{BoardError, BoardResult};
use crate::types::{Job, JobId};

impl Board {
    pub fn job(&self, id: &JobId) -> Option<&Job> {
        self.jobs.iter().find(|j| &j.id == id)
    }

    /// Id of the default job, or the fallback id on a board with no jobs
    pub fn default_job_id(&self) -> JobId {
        self.jobs
            .first()
            .map(|j| j.id.clone())
            .unwrap_or_else(|| JobId::from(FALLBACK_JOB_ID))
    }

    /// Resolve a possibly dangling job reference
    pub fn resolve_job(&self, id: &JobId) -> Option<&Job> {
        self.job(id).or_else(|| self.jobs.first())
    }

    pub fn add_job(&mut self, name: impl Into<String>, color: impl Into<String>) -> JobId {
        let job = Job::new(JobId::generate(), name, color);
        let id = job.id.clone();
        tracing::debug!(job = %id, name = %job.name, "add job");
        self.jobs.push(job);
        self.emit(BoardChange::Jobs);
        id
    }

    pub fn rename_job(&mut self, id: &JobId, name: impl Into<String>) -> BoardResult<()> {
        let job = self
            .jobs
            .iter_mut()
            .find(|j| &j.id == id)
            .ok_or_else(|| BoardError::JobNotFound(id.clone()))?;
        job.name = name.into();
        self.emit(BoardChange::Jobs);
        Ok(())
    }

    /// Delete a job. Notes that referenced it move to the default job of the
    /// remaining list. The last job can never be deleted.
    pub fn delete_job(&mut self, id: &JobId) -> BoardResult<()> {
        if self.job(id).is_none() {
            return Err(BoardError::JobNotFound(id.clone()));
        }
        if self.jobs.len() <= 1 {
            tracing::warn!(job = %id, "refusing to delete the last job");
            return Err(BoardError::LastJob);
        }

        self.jobs.retain(|j| &j.id != id);
        let fallback = self.default_job_id();
        let mut moved = 0usize;
        for note in self.notes.iter_mut().filter(|n| &n.job == id) {
            note.job = fallback.clone();
            moved += 1;
        }
        tracing::debug!(job = %id, reassigned = moved, to = %fallback, "delete job");

        self.emit(BoardChange::Jobs);
        if moved > 0 {
            self.emit(BoardChange::Notes);
        }
        Ok(())
    }
}
