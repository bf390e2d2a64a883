use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `level` is any `EnvFilter` directive ("info", "serverless_batch=debug");
/// unparsable values fall back to `info`. Lambda output goes to CloudWatch,
/// which timestamps lines itself and does not render colours.
pub fn init_logging(level: &str, lambda: bool) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);
    if lambda {
        registry
            .with(tracing_subscriber::fmt::layer().with_ansi(false).without_time())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
