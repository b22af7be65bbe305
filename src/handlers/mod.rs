pub mod health_handler;
pub mod job_handler;

pub use health_handler::health_check;
pub use job_handler::{list_jobs, list_jobs_by_status, submit_jobs};
