// file: src/utils/logging.rs
// description: Tracing subscriber initialization for CloudWatch output

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // CloudWatch renders raw ANSI escapes, so coloring stays off
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
