use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a stderr `tracing` subscriber.
///
/// The filter is read from `PAGBANK_LOG`, then `RUST_LOG`, defaulting to `info`.
/// Safe to call more than once; later calls keep the existing subscriber.
pub fn init_logging() {
    let filter = std::env::var("PAGBANK_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
