//! Subscriber setup for the harness binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Switches log lines and run errors to JSON.
pub const ENV_LOG_JSON: &str = "DRAGONWORDS_LOG_JSON";

/// Filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

#[must_use]
pub fn json_requested() -> bool {
    json_requested_with(|key| std::env::var(key).ok())
}

pub fn json_requested_with<F>(get_env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    get_env(ENV_LOG_JSON).is_some_and(|value| {
        matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        )
    })
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);
    let installed = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };
    if installed.is_err() {
        tracing::debug!("global subscriber already installed");
    }
}
