use serde::{Deserialize, Serialize};

pub type JobId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Processed,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::Processed => "processed",
        }
    }
}

/// One unit of work and its outcome.
///
/// Serialized as `{id, name, data, status, result}`. `result` stays zero
/// until the record is processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    pub data: Vec<i64>,
    pub status: JobStatus,
    pub result: i64,
}

impl Job {
    pub fn new(id: JobId, name: impl Into<String>, data: Vec<i64>) -> Self {
        Self {
            id,
            name: name.into(),
            data,
            status: JobStatus::Pending,
            result: 0,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == JobStatus::Pending
    }

    /// Sum of `data` with wrapping 64-bit arithmetic.
    pub fn sum(&self) -> i64 {
        self.data.iter().fold(0_i64, |acc, value| acc.wrapping_add(*value))
    }

    /// Sets `result` and flips the status in one step. Already processed
    /// records are left untouched so the result is never recomputed.
    pub fn mark_processed(&mut self) {
        if !self.is_pending() {
            return;
        }
        self.result = self.sum();
        self.status = JobStatus::Processed;
    }
}
