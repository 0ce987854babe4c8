//! Process-wide tracing setup and teardown.
//!
//! [`init`] installs the global subscriber once at startup and returns a
//! [`TelemetryGuard`]. The guard owns the non-blocking writer; dropping it
//! (or calling [`TelemetryGuard::shutdown`]) flushes buffered log lines, so
//! keep it alive until the server has stopped.

use kennel_core::telemetry::AppLogger;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppEnv;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str =
    "kennel_api=debug,kennel_core=debug,kennel_db=debug,tower_http=debug";

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line, with the active span list for correlation.
    Json,
    /// Human-readable, coloured console output.
    Console,
}

impl LogFormat {
    pub fn for_env(env: AppEnv) -> Self {
        match env {
            AppEnv::Production => LogFormat::Json,
            AppEnv::Development => LogFormat::Console,
        }
    }
}

/// Keeps the log writer alive and hands out the service logging handle.
pub struct TelemetryGuard {
    logger: AppLogger,
    _writer: WorkerGuard,
}

impl TelemetryGuard {
    /// Logging handle to inject into services.
    pub fn logger(&self) -> AppLogger {
        self.logger.clone()
    }

    /// Flush pending log lines and release the writer.
    pub fn shutdown(self) {
        tracing::info!("Telemetry shutting down");
        drop(self);
    }
}

/// Install the global tracing subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init(format: LogFormat, project_id: &str) -> Result<TelemetryGuard, TelemetryError> {
    let (writer, writer_guard) = tracing_appender::non_blocking(std::io::stdout());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(writer),
            )
            .try_init()?,
        LogFormat::Console => registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .try_init()?,
    }

    Ok(TelemetryGuard {
        logger: AppLogger::new(project_id),
        _writer: writer_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_logs_json() {
        assert_eq!(LogFormat::for_env(AppEnv::Production), LogFormat::Json);
        assert_eq!(LogFormat::for_env(AppEnv::Development), LogFormat::Console);
    }

    #[test]
    fn default_filter_covers_every_crate() {
        for target in ["kennel_api", "kennel_core", "kennel_db", "tower_http"] {
            assert!(DEFAULT_FILTER.contains(target), "missing {target}");
        }
        assert!(DEFAULT_FILTER.parse::<EnvFilter>().is_ok());
    }
}
