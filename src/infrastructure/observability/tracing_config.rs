use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment,
            level: settings.level.clone(),
            json_format: settings.enable_json,
        }
    }

    pub fn default_directive(&self) -> String {
        format!("{},travel_rag=debug,tower_http=debug", self.level)
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            level: "info".to_string(),
            json_format: false,
        }
    }
}
