//! Diagnostic logging shared by the binaries.
//!
//! Events go to stderr so stdout carries only the transcript. The filter is
//! fixed rather than read from `RUST_LOG`; the binaries consult no
//! environment variables. Colour is only used when stderr is a terminal, so
//! piped output keeps plain `field=value` pairs.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "factory_status=info";

/// Install the global subscriber. Safe to call more than once.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
