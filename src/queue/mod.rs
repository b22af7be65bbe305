mod job;
mod queue_manager;
mod store;
mod worker;

pub use job::{Job, JobId, JobStatus};
pub use queue_manager::{IdPolicy, QueueConfig, QueueManager, QueueStats, DEFAULT_TICK_INTERVAL};
pub use store::{JobFilter, JobQueues, JobStore};
pub use worker::{process_next, WorkerHandle, WorkerState};
