use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_LOG_FILE: &str = "logs/app.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub directory: PathBuf,
    pub file_name: String,
}

impl LogSettings {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self::resolve(
            std::env::var("LOG_LEVEL").ok().as_deref(),
            std::env::var("LOG_FILE").ok().as_deref(),
        )
    }

    fn resolve(level: Option<&str>, log_file: Option<&str>) -> Self {
        let log_file = Path::new(log_file.filter(|f| !f.is_empty()).unwrap_or(DEFAULT_LOG_FILE));

        let directory = log_file
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
            .to_path_buf();
        let file_name = log_file
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("app.log")
            .to_string();

        Self {
            level: level.filter(|l| !l.is_empty()).unwrap_or(DEFAULT_LOG_LEVEL).to_string(),
            directory,
            file_name,
        }
    }
}

/// Console output plus a daily rolling JSON log file. `RUST_LOG` wins over
/// `LOG_LEVEL` when both are set.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// life of the process.
pub fn setup_logging() -> WorkerGuard {
    let settings = LogSettings::from_env();

    std::fs::create_dir_all(&settings.directory).ok();

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &settings.directory, &settings.file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact();

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_target(true)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level)))
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized with level: {}", settings.level);
    guard
}
