//! Log output for the blog API.
//!
//! Human-readable output by default; `LOG_FORMAT=json` switches to one JSON object per
//! line. `RUST_LOG` overrides the filter below.

use std::env;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: repository and handler debug lines, `info`
/// for everything else (actix, sqlx).
const DEFAULT_FILTER: &str = "info,blog_api=debug,blog_infra=debug";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub json_logs: bool,
    /// Reported in the startup line so aggregated logs can be told apart.
    pub service_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            service_name: "blog-api".to_string(),
        }
    }
}

impl TelemetryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            json_logs: lookup("LOG_FORMAT")
                .map(|format| format.trim().eq_ignore_ascii_case("json"))
                .unwrap_or(defaults.json_logs),
            service_name: lookup("OTEL_SERVICE_NAME").unwrap_or(defaults.service_name),
        }
    }
}

/// Install the global subscriber. Call once, before the pool is opened, so connection
/// failures are logged.
pub fn init_telemetry(config: &TelemetryConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer().pretty()).init();
    }

    tracing::info!(
        service = %config.service_name,
        json_logs = config.json_logs,
        "Logging initialized"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_vars(vars: &[(&str, &str)]) -> TelemetryConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        TelemetryConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_pretty_logs_by_default() {
        assert_eq!(from_vars(&[]), TelemetryConfig::default());
    }

    #[test]
    fn test_json_format_and_service_name() {
        let config = from_vars(&[("LOG_FORMAT", " JSON "), ("OTEL_SERVICE_NAME", "blog-api-eu")]);

        assert!(config.json_logs);
        assert_eq!(config.service_name, "blog-api-eu");
    }

    #[test]
    fn test_other_formats_stay_pretty() {
        assert!(!from_vars(&[("LOG_FORMAT", "compact")]).json_logs);
    }
}
