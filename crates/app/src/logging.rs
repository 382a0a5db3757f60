//! Logging subscriber initialisation.

use tracing_subscriber::{
    EnvFilter,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

/// Initialise the compact fmt subscriber, honouring `RUST_LOG` when set.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init_subscriber(default_level: &str) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().compact().with_target(true))
        .with(filter)
        .try_init()
}
