use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Route diagnostics to a daily-rotated file under the platform cache dir;
/// the alternate screen owns stdout/stderr, so nothing may log there.
/// Filter via `FINGUIDE_LOG` (defaults to info for our crates).
///
/// Returns the appender guard, which must stay alive for the life of the
/// process, or `None` if no cache directory is available (logging is then
/// simply disabled).
pub fn init() -> Option<WorkerGuard> {
    let dir = dirs::cache_dir()?.join("finguide");
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(dir, "finguide.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("FINGUIDE_LOG")
        .unwrap_or_else(|_| EnvFilter::new("finguide_tui=info,finguide_content=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Some(guard)
}
