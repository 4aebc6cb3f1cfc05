use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_DIR: &str = "logs";

/// Installs the global tracing subscriber.
///
/// Events always go to a daily rolling file under `logs/`; they are mirrored to
/// stdout when `log_to_stdout` is set. `log_level` is an `EnvFilter` directive
/// such as `seeder=debug,db=info`. The returned guard must be kept alive for the
/// lifetime of the process or buffered file output is lost.
pub fn init_logging(log_file: &str, log_level: &str, log_to_stdout: bool) -> WorkerGuard {
    fs::create_dir_all(LOG_DIR).ok();

    let file_name = Path::new(log_file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "seeder.log".into());

    let file_appender = rolling::daily(LOG_DIR, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    let stdout_layer = log_to_stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(true)
    });

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    registry.with(stdout_layer).try_init().ok();

    guard
}
