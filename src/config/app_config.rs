use serde::Deserialize;
use tokio::time::Duration;

use crate::queue::{IdPolicy, QueueConfig, DEFAULT_TICK_INTERVAL};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub app_name: String,
    pub app_version: String,
    pub tick_interval_secs: u64,
    #[serde(skip)]
    pub id_policy: IdPolicy,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()?;

        let tick_interval = parse_tick_interval(cfg.get_string("ENV_SECONDS").ok().as_deref());
        tracing::info!("Tick interval set to {} seconds", tick_interval.as_secs());

        let id_policy = match cfg.get_string("JOB_ID_POLICY") {
            Ok(raw) => IdPolicy::parse(&raw).unwrap_or_else(|| {
                tracing::warn!("Invalid JOB_ID_POLICY value '{}', using sequential ids", raw);
                IdPolicy::Sequential
            }),
            Err(_) => IdPolicy::default(),
        };

        Ok(Self {
            host: cfg.get_string("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: cfg.get_int("PORT").unwrap_or(5000) as u16,
            environment: cfg.get_string("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            app_name: cfg.get_string("APP_NAME").unwrap_or_else(|_| "job-ticker".to_string()),
            app_version: cfg
                .get_string("APP_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            tick_interval_secs: tick_interval.as_secs(),
            id_policy,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs)
    }

    pub fn queue_config(&self) -> QueueConfig {
        QueueConfig::new(self.tick_interval(), self.id_policy)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            environment: "development".to_string(),
            app_name: "job-ticker".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            tick_interval_secs: DEFAULT_TICK_INTERVAL.as_secs(),
            id_policy: IdPolicy::default(),
        }
    }
}

/// Whole seconds from `ENV_SECONDS`. Missing, non-numeric, negative or zero
/// values fall back to the default interval with a warning.
pub fn parse_tick_interval(raw: Option<&str>) -> Duration {
    match raw.map(str::trim).and_then(|s| s.parse::<u64>().ok()) {
        Some(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            tracing::warn!(
                "Invalid ENV_SECONDS value {:?}, using {} seconds",
                raw.unwrap_or(""),
                DEFAULT_TICK_INTERVAL.as_secs()
            );
            DEFAULT_TICK_INTERVAL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_interval_uses_valid_seconds() {
        assert_eq!(parse_tick_interval(Some("3")), Duration::from_secs(3));
        assert_eq!(parse_tick_interval(Some(" 45 ")), Duration::from_secs(45));
    }

    #[test]
    fn tick_interval_defaults_on_bad_input() {
        assert_eq!(parse_tick_interval(None), DEFAULT_TICK_INTERVAL);
        assert_eq!(parse_tick_interval(Some("")), DEFAULT_TICK_INTERVAL);
        assert_eq!(parse_tick_interval(Some("ten")), DEFAULT_TICK_INTERVAL);
        assert_eq!(parse_tick_interval(Some("0")), DEFAULT_TICK_INTERVAL);
        assert_eq!(parse_tick_interval(Some("-5")), DEFAULT_TICK_INTERVAL);
        assert_eq!(parse_tick_interval(Some("2.5")), DEFAULT_TICK_INTERVAL);
    }

    #[test]
    fn default_config_maps_to_queue_config() {
        let config = AppConfig::default();
        let queue = config.queue_config();

        assert_eq!(queue.tick_interval, Duration::from_secs(10));
        assert_eq!(queue.id_policy, IdPolicy::Sequential);
        assert_eq!(config.server_address(), "0.0.0.0:5000");
        assert!(!config.is_production());
    }
}
