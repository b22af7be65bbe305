use std::collections::VecDeque;

use tokio::sync::{RwLock, RwLockWriteGuard};

use super::job::{Job, JobStatus};

/// Which collection(s) a listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobFilter {
    Pending,
    Processed,
    All,
}

impl JobFilter {
    /// Anything other than `pending` or `processed` falls back to `All`.
    pub fn from_status(status: &str) -> Self {
        match status {
            s if s == JobStatus::Pending.as_str() => JobFilter::Pending,
            s if s == JobStatus::Processed.as_str() => JobFilter::Processed,
            _ => JobFilter::All,
        }
    }
}

/// The two job collections. Only reachable through [`JobStore`], so every
/// mutation happens while the write lock is held.
#[derive(Debug, Default)]
pub struct JobQueues {
    pending: VecDeque<Job>,
    processed: Vec<Job>,
}

impl JobQueues {
    pub fn append_pending(&mut self, job: Job) {
        self.pending.push_back(job);
    }

    pub fn pop_oldest_pending(&mut self) -> Option<Job> {
        self.pending.pop_front()
    }

    pub fn append_processed(&mut self, job: Job) {
        self.processed.push(job);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn processed_len(&self) -> usize {
        self.processed.len()
    }

    /// Copies the selected collection(s). `All` lists processed records
    /// first, then pending ones.
    pub fn snapshot(&self, filter: JobFilter) -> Vec<Job> {
        match filter {
            JobFilter::Pending => self.pending.iter().cloned().collect(),
            JobFilter::Processed => self.processed.clone(),
            JobFilter::All => {
                let mut jobs = Vec::with_capacity(self.processed.len() + self.pending.len());
                jobs.extend(self.processed.iter().cloned());
                jobs.extend(self.pending.iter().cloned());
                jobs
            }
        }
    }
}

/// Pending and processed collections behind a single reader-writer lock.
#[derive(Debug, Default)]
pub struct JobStore {
    queues: RwLock<JobQueues>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclusive access for submissions and ticks.
    pub async fn write(&self) -> RwLockWriteGuard<'_, JobQueues> {
        self.queues.write().await
    }

    pub async fn snapshot(&self, filter: JobFilter) -> Vec<Job> {
        self.queues.read().await.snapshot(filter)
    }

    /// `(pending, processed)` counts read under one shared lock.
    pub async fn counts(&self) -> (usize, usize) {
        let queues = self.queues.read().await;
        (queues.pending_len(), queues.processed_len())
    }
}
