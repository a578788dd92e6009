//! Tracing setup for station shells
//!
//! Daily-rolled file under the station log directory plus a stdout layer,
//! both behind an env filter. Shells call [`init`] once at startup; the
//! library itself never installs a subscriber.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

/// Initialize tracing with a daily-rolled file in `log_dir` plus stdout.
///
/// Returns the appender guard; dropping it stops the background log writer,
/// so keep it alive for the process lifetime. Panics if a global subscriber
/// is already installed, so call at most once.
pub fn init(log_dir: &Path) -> std::io::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, "intake-station.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if cfg!(debug_assertions) {
        EnvFilter::new("info,intake_station=debug")
    } else {
        EnvFilter::new("warn,intake_station=info")
    };

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking_file);

    let stdout_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(true)
        .with_target(true)
        .with_writer(std::io::stdout);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(guard)
}
