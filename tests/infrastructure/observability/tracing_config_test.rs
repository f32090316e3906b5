use travel_rag::infrastructure::observability::{TracingConfig, init_tracing};
use travel_rag::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_uses_plain_info_logging() {
    let config = TracingConfig::default();

    assert!(!config.json_format);
    assert_eq!(config.level, "info");
    assert_eq!(config.environment, Environment::Local);
}

#[test]
fn given_logging_settings_when_converted_then_fields_are_copied() {
    let settings = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.environment, Environment::Prod);
    assert!(config.default_directive().starts_with("warn,"));
    assert!(config.default_directive().contains("travel_rag=debug"));
}

#[test]
fn given_tracing_already_initialised_when_initialising_again_then_does_not_panic() {
    init_tracing(&TracingConfig::default());
    init_tracing(&TracingConfig::default());
}
