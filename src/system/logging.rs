//! Logging system initialization
//!
//! Sets up tracing from the loaded configuration: level filter plus
//! console or append-to-file output.

use crate::config::AppConfig;

/// Initialize the tracing subscriber.
///
/// Call once at startup, after configuration is loaded. The returned
/// guard must stay alive for the duration of the program so non-blocking
/// writes are flushed.
///
/// # Panics
/// * If opening the log file fails
/// * If a global subscriber is already set
pub fn init_logging(config: &AppConfig) -> tracing_appender::non_blocking::WorkerGuard {
    let writer: Box<dyn std::io::Write + Send + Sync> = match &config.log_file {
        Some(log_file) if !log_file.is_empty() => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .expect("Failed to open log file");
            Box::new(file)
        }
        _ => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.log_level.clone());

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(config.log_file.as_ref().is_none_or(|f| f.is_empty()))
        .init();

    guard
}
