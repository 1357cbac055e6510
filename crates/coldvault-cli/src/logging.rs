//! Logging setup for the CLI process.

use crate::progress::ProgressAwareStderr;
use tracing::Level;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Targets held at WARN unless `-dd` is given.
const NOISY_MODULES: [&str; 5] = ["aws_", "hyper", "h2", "rustls", "tower"];

/// Installs the global subscriber.
///
/// `RUST_LOG`, when set, replaces the `-d` based level entirely.
pub fn setup_logging(debug: u8) {
    let level = match debug {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(ProgressAwareStderr)
        .with_ansi(console::colors_enabled_stderr())
        .with_target(false);

    let result = if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
            .try_init()
    } else {
        let show_sdk = debug >= 2;
        let module_filter = filter_fn(move |metadata| {
            show_sdk
                || *metadata.level() <= Level::WARN
                || !NOISY_MODULES
                    .iter()
                    .any(|name| metadata.target().starts_with(name))
        });
        tracing_subscriber::registry()
            .with(fmt_layer.with_filter(level).with_filter(module_filter))
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!(%level, "logging initialized");
    }
}
