use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "SHELF_WINDOW_LOG";

/// Install a stderr subscriber so stdout stays pure JSON lines.
///
/// Defaults to `warn`; `SHELF_WINDOW_LOG=shelf_window=debug` shows every
/// scroll, resize and render event. Calling this twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
