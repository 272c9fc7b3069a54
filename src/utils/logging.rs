use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise fontfold logs at info, or debug
/// when `debug_mode` is set.
pub fn init_logging(debug_mode: bool) {
    let default_directive = if debug_mode { "fontfold=debug" } else { "fontfold=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
