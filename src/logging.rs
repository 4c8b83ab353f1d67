use std::{any::Any, backtrace::Backtrace};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Installs the global subscriber and routes panics through it. `RUST_LOG`
/// overrides `logging.rust_log`.
pub fn init_tracing(cfg: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&cfg.rust_log)
            .with_context(|| format!("invalid logging.rust_log {:?}", cfg.rust_log))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .context("tracing subscriber already installed")?;

    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(ToString::to_string)
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::error!(
            panic = %panic_message(info.payload()),
            location = %location,
            backtrace = %Backtrace::capture(),
            "thread panicked"
        );
    }));
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
