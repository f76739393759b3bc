use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, filter::Targets, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt,
};

const APP_TARGET: &str = "debtplan";

/// Events from this crate pass only in verbose mode.
fn app_filter(verbose: bool) -> Targets {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::OFF
    };
    Targets::new().with_target(APP_TARGET, level)
}

/// Installs the global subscriber on stderr so report output on stdout stays
/// clean. `RUST_LOG` narrows what the app filter lets through.
pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { "off" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .pretty()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(app_filter(verbose))
        .with(env_filter)
        .try_init()
        .context("Failed to install the logging subscriber")
}
