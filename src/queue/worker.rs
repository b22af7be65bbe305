use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};
use tokio_util::sync::CancellationToken;

use super::job::Job;
use super::store::JobStore;

/// Lifecycle of the background tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerState {
    NotStarted,
    Idle,
    Ticking,
    Stopped,
}

/// Pops the oldest pending job, computes its result and moves it to the
/// processed collection, all under one write lock. `None` on an empty queue.
pub async fn process_next(store: &JobStore) -> Option<Job> {
    let mut queues = store.write().await;

    let Some(mut job) = queues.pop_oldest_pending() else {
        tracing::trace!("No pending jobs, tick is idle");
        return None;
    };

    job.mark_processed();
    queues.append_processed(job.clone());

    tracing::debug!(job_id = job.id, name = %job.name, result = job.result, "Job processed");
    Some(job)
}

/// Running tick loop plus the token that stops it.
#[derive(Debug)]
pub struct WorkerHandle {
    token: CancellationToken,
    task: JoinHandle<()>,
}

impl WorkerHandle {
    pub fn spawn(
        store: Arc<JobStore>,
        interval: Duration,
        state: Arc<watch::Sender<WorkerState>>,
    ) -> Self {
        let token = CancellationToken::new();
        state.send_replace(WorkerState::Idle);

        let task = tokio::spawn(run(store, interval, token.clone(), state));

        Self { token, task }
    }

    /// Cancels the loop and waits for the task to exit. A tick already in
    /// progress finishes first.
    pub async fn shutdown(mut self) {
        self.token.cancel();

        if let Err(e) = (&mut self.task).await {
            tracing::error!("Job worker terminated abnormally: {}", e);
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

async fn run(
    store: Arc<JobStore>,
    interval: Duration,
    token: CancellationToken,
    state: Arc<watch::Sender<WorkerState>>,
) {
    tracing::info!("Job worker ticking every {:?}", interval);

    loop {
        tokio::select! {
            biased;

            _ = token.cancelled() => break,

            _ = sleep(interval) => {
                state.send_replace(WorkerState::Ticking);
                process_next(&store).await;
                state.send_replace(WorkerState::Idle);
            }
        }
    }

    state.send_replace(WorkerState::Stopped);
    tracing::debug!("Job worker loop exited");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::job::JobStatus;
    use crate::queue::store::JobFilter;

    async fn seeded_store(count: u64) -> Arc<JobStore> {
        let store = Arc::new(JobStore::new());
        {
            let mut queues = store.write().await;
            for id in 1..=count {
                queues.append_pending(Job::new(id, format!("job {}", id), vec![id as i64, 1]));
            }
        }
        store
    }

    #[tokio::test]
    async fn process_next_on_empty_store_is_noop() {
        let store = JobStore::new();
        assert!(process_next(&store).await.is_none());
        assert_eq!(store.counts().await, (0, 0));
    }

    #[tokio::test]
    async fn process_next_moves_head_to_processed() {
        let store = seeded_store(2).await;

        let job = process_next(&store).await.unwrap();
        assert_eq!(job.id, 1);
        assert_eq!(job.status, JobStatus::Processed);
        assert_eq!(job.result, 2);

        assert_eq!(store.counts().await, (1, 1));
        assert_eq!(store.snapshot(JobFilter::Processed).await, vec![job]);
    }

    #[tokio::test(start_paused = true)]
    async fn loop_processes_one_job_per_interval() {
        let store = seeded_store(3).await;
        let (tx, _rx) = watch::channel(WorkerState::NotStarted);
        let state = Arc::new(tx);

        let worker = WorkerHandle::spawn(store.clone(), Duration::from_secs(5), state.clone());
        assert_eq!(*state.borrow(), WorkerState::Idle);

        sleep(Duration::from_secs(4)).await;
        assert_eq!(store.counts().await, (3, 0));

        sleep(Duration::from_secs(2)).await;
        assert_eq!(store.counts().await, (2, 1));

        sleep(Duration::from_secs(5)).await;
        assert_eq!(store.counts().await, (1, 2));

        worker.shutdown().await;
        assert_eq!(*state.borrow(), WorkerState::Stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_wakes_a_waiting_loop_and_stops_ticks() {
        let store = seeded_store(2).await;
        let (tx, _rx) = watch::channel(WorkerState::NotStarted);

        let worker = WorkerHandle::spawn(store.clone(), Duration::from_secs(3600), Arc::new(tx));
        worker.shutdown().await;

        sleep(Duration::from_secs(7200)).await;
        assert_eq!(store.counts().await, (2, 0));
    }
}
