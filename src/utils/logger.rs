use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` overrides the default directive picked from `--verbose`.
/// Diagnostics go to stderr; stdout is reserved for the fetch report.
pub fn init_cli_logger(verbose: bool) {
    let default_directive = if verbose {
        "sample_fetch=debug,info"
    } else {
        "sample_fetch=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
