use tracing_subscriber::{fmt, EnvFilter};

/** installs the global tracing subscriber.
`RUST_LOG` takes precedence over the level given (e.g. "info", "debug").
Calling it twice is harmless (the second subscriber is ignored).
*/
pub fn init_logging(level:&str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
