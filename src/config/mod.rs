pub mod app_config;
pub mod app_state;

pub use app_config::{parse_tick_interval, AppConfig};
pub use app_state::AppState;
