//! Tracing setup for hosts embedding the ante pipeline.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Returned when a global subscriber is already installed.
pub type TracingInitError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
}

/// Install a global `fmt` subscriber. `RUST_LOG` wins over `log_level`.
pub fn init_tracing(log_level: &str) -> Result<(), TracingInitError> {
    fmt().with_env_filter(env_filter(log_level)).try_init()
}

pub fn init_tracing_from_config(config: &ObservabilityConfig) -> Result<(), TracingInitError> {
    if config.log_format.eq_ignore_ascii_case("json") {
        fmt()
            .json()
            .with_env_filter(env_filter(&config.log_level))
            .try_init()
    } else {
        init_tracing(&config.log_level)
    }
}
