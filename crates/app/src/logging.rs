use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Resolve the event filter. `RUST_LOG` wins over the CLI/env level.
pub fn resolve_filter(cli_level: &str) -> String {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| cli_level.to_owned())
}

/// Install the global subscriber, writing to stderr.
pub fn init_logging(cli_level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(resolve_filter(cli_level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
