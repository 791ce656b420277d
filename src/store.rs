use crate::models::{JobId, JobSummary};

/// In-memory store of known jobs and the active selection.
///
/// Jobs are append/replace-only: no operation removes an entry or mutates
/// one in place. Only the sync flows write to the store; renderers read it.
#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: Vec<JobSummary>,
    active: Option<JobId>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the listing wholesale (refresh path).
    ///
    /// The active id is left alone even when it no longer matches any
    /// entry; the detail views keep showing the last-loaded job until the
    /// user picks another one.
    pub fn set_all(&mut self, jobs: Vec<JobSummary>) {
        self.jobs = jobs;
    }

    /// Insert at the front. Submissions surface first regardless of their
    /// `created_at` relative to existing entries.
    pub fn prepend(&mut self, summary: JobSummary) {
        self.jobs.insert(0, summary);
    }

    pub fn set_active(&mut self, id: JobId) {
        self.active = Some(id);
    }

    pub fn jobs(&self) -> &[JobSummary] {
        &self.jobs
    }

    pub fn active_id(&self) -> Option<&JobId> {
        self.active.as_ref()
    }

    pub fn first_id(&self) -> Option<JobId> {
        self.jobs.first().map(|job| job.id.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}
