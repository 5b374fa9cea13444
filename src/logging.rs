use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr so listings on stdout stay clean. `RUST_LOG` overrides the level.
pub fn init(verbose: bool) {
    let default_filter = if verbose {
        "tba=debug,tba_core=debug"
    } else {
        "tba=warn,tba_core=warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

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
