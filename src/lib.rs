pub mod config;
pub mod dto;
pub mod handlers;
pub mod interceptors;
pub mod middleware;
pub mod queue;
pub mod routes;

pub use config::{AppConfig, AppState};
pub use queue::{QueueConfig, QueueManager};
pub use routes::create_router;
