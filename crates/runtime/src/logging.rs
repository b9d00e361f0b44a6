//! Tracing subscriber installation.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::api::{Result, RuntimeError};
use crate::config::LoggingConfig;

/// Installs the global subscriber.
///
/// With a log directory configured, output goes through a non-blocking file
/// writer and the returned guard must be held until shutdown to flush it.
pub fn setup_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    match &config.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir).map_err(RuntimeError::LogDirectory)?;
            let file_appender = tracing_appender::rolling::never(dir, &config.file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(file_layer)
                .try_init()
                .map_err(RuntimeError::LoggingInit)?;

            tracing::info!(
                target: "runtime::logging",
                "Log file: {}",
                dir.join(&config.file_name).display()
            );
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .map_err(RuntimeError::LoggingInit)?;
            Ok(None)
        }
    }
}
