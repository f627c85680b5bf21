use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ErrorContext, RedmanResult};

/// Timestamped progress log on stdout. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool) -> RedmanResult<()> {
    let default_directive = if verbose { "redman=debug" } else { "redman=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .context("Failed to initialize logging")
}
