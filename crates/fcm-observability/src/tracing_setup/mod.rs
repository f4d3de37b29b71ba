//! Tracing setup: subscriber initialization, span macros, and structured events.

pub mod events;
pub mod spans;

use fcm_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "FCM_LOG";

/// Initialize tracing with default settings: `info` level, plain text.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    init_from_config(&ObservabilityConfig::default())
}

/// Initialize tracing from config. `FCM_LOG` wins over `log_level` when set.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(config.json)
        .with_line_number(config.json);

    if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
