//! Runtime configuration loaded from environment variables.

use std::time::Duration;

/// Session registry tuning.
///
/// Environment variables:
/// - `SESSION_RETENTION_SECS`: how long sessions are kept (default: 3600)
/// - `SESSION_SWEEP_INTERVAL_SECS`: sweep timer period (default: 600)
#[derive(Debug, Clone, Copy)]
pub struct RuntimeSettings {
    pub session_retention: Duration,
    pub sweep_interval: Duration,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            session_retention: Duration::from_secs(3600),
            sweep_interval: Duration::from_secs(600),
        }
    }
}

pub fn load_runtime_settings() -> RuntimeSettings {
    let defaults = RuntimeSettings::default();
    RuntimeSettings {
        session_retention: Duration::from_secs(
            std::env::var("SESSION_RETENTION_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.session_retention.as_secs()),
        ),
        sweep_interval: Duration::from_secs(
            std::env::var("SESSION_SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_interval.as_secs()),
        ),
    }
}
