//! Tracing subscriber setup for the `ducky` binary.

use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for a verbosity level: 0 = info, 1 = debug, 2+ = trace.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "duckyscript=error,ducky=error";
    }
    match verbose {
        0 => "duckyscript=info,ducky=info",
        1 => "duckyscript=debug,ducky=debug",
        _ => "duckyscript=trace,ducky=trace",
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays free for
/// the trace output and the PTY echo. `RUST_LOG` overrides the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
