use tracing_subscriber::{fmt, EnvFilter};

/// Sends tracing output to stderr, `warn` and above unless `RUST_LOG` says otherwise.
///
/// Stdout stays reserved for the usage and confirmation lines.
pub fn init() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();
}
