//! Diagnostic logging setup.
//!
//! Diagnostics go to stderr through `tracing`; command results go to stdout.
//! `RUST_LOG` overrides the level chosen with `-v`.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset, by `-v` count.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the stderr subscriber. Later calls are no-ops.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
