//! Span timing for the searches.
//!
//! Enable with `--features instrumentation`. Every instrumented search logs
//! its busy and idle time when its span closes; `RUST_LOG` picks what is
//! shown (for example `RUST_LOG=lookahead_chess::search=debug`).

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Also routes `log` records through it.
pub fn init_tracing() {
    let result = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .try_init();

    if let Err(error) = result {
        eprintln!("failed to set tracing subscriber: {}", error);
    }
}
