//! Terminal front end for the dice duel: text rendering, the interactive
//! loop and shared input helpers for the `risiko` binaries.

pub mod input;
pub mod play;
pub mod render;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Log to stderr so stdout stays clean for boards and JSON.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
