use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{watch, Mutex};
use tokio::time::Duration;

use super::job::{Job, JobId};
use super::store::{JobFilter, JobStore};
use super::worker::{self, WorkerHandle, WorkerState};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(10);

/// How submission ids are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Monotonic counter starting at 1, unique for the process lifetime.
    #[default]
    Sequential,
    /// `pending length + 1` at insertion time. Ids can repeat once earlier
    /// jobs have been drained.
    PendingPosition,
}

impl IdPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sequential" => Some(IdPolicy::Sequential),
            "pending-position" | "pending_position" => Some(IdPolicy::PendingPosition),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QueueConfig {
    pub tick_interval: Duration,
    pub id_policy: IdPolicy,
}

impl QueueConfig {
    pub fn new(tick_interval: Duration, id_policy: IdPolicy) -> Self {
        Self {
            tick_interval,
            id_policy,
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL, IdPolicy::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueueStats {
    pub pending: usize,
    pub processed: usize,
}

/// In-memory job queue drained by a background worker, one job per tick.
///
/// Constructed explicitly and shared by reference (usually `Arc`), so tests
/// can run independent managers side by side.
#[derive(Debug)]
pub struct QueueManager {
    store: Arc<JobStore>,
    config: QueueConfig,
    next_id: AtomicU64,
    worker: Mutex<Option<WorkerHandle>>,
    state: Arc<watch::Sender<WorkerState>>,
}

impl QueueManager {
    pub fn new(config: QueueConfig) -> Self {
        let (state, _) = watch::channel(WorkerState::NotStarted);

        Self {
            store: Arc::new(JobStore::new()),
            config,
            next_id: AtomicU64::new(1),
            worker: Mutex::new(None),
            state: Arc::new(state),
        }
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Appends a new pending job and returns its id.
    pub async fn submit(&self, name: impl Into<String>, data: Vec<i64>) -> JobId {
        let mut queues = self.store.write().await;

        // Assigned under the write lock so ids follow arrival order.
        let id = match self.config.id_policy {
            IdPolicy::Sequential => self.next_id.fetch_add(1, Ordering::Relaxed),
            IdPolicy::PendingPosition => queues.pending_len() as JobId + 1,
        };

        queues.append_pending(Job::new(id, name, data));
        drop(queues);

        tracing::debug!(job_id = id, "Job queued");
        id
    }

    pub async fn list(&self, filter: JobFilter) -> Vec<Job> {
        self.store.snapshot(filter).await
    }

    pub async fn stats(&self) -> QueueStats {
        let (pending, processed) = self.store.counts().await;
        QueueStats { pending, processed }
    }

    /// Runs one tick immediately, outside the timer.
    pub async fn tick(&self) -> Option<Job> {
        worker::process_next(&self.store).await
    }

    pub fn worker_state(&self) -> WorkerState {
        *self.state.borrow()
    }

    /// Spawns the tick loop. Returns without waiting for the first tick; a
    /// second call while the worker runs is ignored.
    pub async fn start(&self) {
        let mut worker = self.worker.lock().await;

        if worker.is_some() {
            tracing::warn!("Job worker already running, ignoring start");
            return;
        }

        *worker = Some(WorkerHandle::spawn(
            self.store.clone(),
            self.config.tick_interval,
            self.state.clone(),
        ));

        tracing::info!("Job worker started");
    }

    /// Cancels the tick loop and waits until it has exited. No tick runs
    /// after this returns. Without a running worker this is a no-op.
    pub async fn stop(&self) {
        let Some(handle) = self.worker.lock().await.take() else {
            tracing::warn!("Job worker is not running, ignoring stop");
            return;
        };

        tracing::info!("Stopping job worker...");
        handle.shutdown().await;
        self.state.send_replace(WorkerState::Stopped);
        tracing::info!("Job worker stopped");
    }
}

impl Default for QueueManager {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}
