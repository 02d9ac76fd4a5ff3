//! Logging setup.
//!
//! Pass-level events go to stderr through a `tracing-subscriber` fmt layer.
//! The `NOON_LOG` environment variable, when set to a valid filter directive
//! string, replaces the per-target levels below.

use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

pub const LOG_ENV: &str = "NOON_LOG";

const PASS_TARGETS: [&str; 4] = [
    "noon::scanner",
    "noon::parser",
    "noon::checker",
    "noon::compiler",
];

/// Default level for every pass: `warn`, or `debug` with `--debug`.
pub fn default_level(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    }
}

fn targets(debug: bool) -> Targets {
    let level = default_level(debug);
    PASS_TARGETS
        .iter()
        .fold(Targets::new().with_default(LevelFilter::WARN), |targets, target| {
            targets.with_target(*target, level)
        })
        .with_target("noon::cli", level)
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(debug: bool, color: bool) {
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(color)
        .with_target(true)
        .without_time();

    let env_filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directives| EnvFilter::try_new(directives).ok());

    let result = match env_filter {
        Some(filter) => tracing_subscriber::registry()
            .with(layer.with_filter(filter))
            .try_init(),
        None => tracing_subscriber::registry()
            .with(layer.with_filter(targets(debug)))
            .try_init(),
    };
    if result.is_err() {
        tracing::debug!(target: "noon::cli", "logging already initialized");
    }
}
