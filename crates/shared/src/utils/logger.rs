use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: human-readable fmt on stdout plus a
/// daily-rolling JSON file under `logs/`. The returned guard must stay alive
/// for the duration of the process or buffered file output is lost.
pub fn init_logger(service_name: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily("logs", format!("{service_name}.json"));
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer())
        .with(fmt::layer().json().with_writer(file_writer))
        .init();

    guard
}
