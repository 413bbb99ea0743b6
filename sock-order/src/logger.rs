//! Logging Infrastructure

use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "sock_order=info,sock_client=info,shared=info";

/// Initialize the logger
///
/// `RUST_LOG` wins over `level`. When `log_dir` exists, output goes to a
/// daily rolling file there instead of stderr.
pub fn init_logger(level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match level {
            Some(level) => EnvFilter::new(format!(
                "sock_order={level},sock_client={level},shared={level}"
            )),
            None => EnvFilter::new(DEFAULT_FILTER),
        }
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "sock-order");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
    }

    subscriber.with_writer(std::io::stderr).init();
}
