use diktat::infrastructure::observability::TracingConfig;
use diktat::presentation::Environment;

#[test]
fn given_environment_when_creating_config_then_carries_environment_and_format() {
    let config = TracingConfig::new(Environment::Prod, true);

    assert_eq!(config.environment, Environment::Prod);
    assert_eq!(config.environment.as_str(), "prod");
    assert!(config.json_format);
}

#[test]
fn given_text_config_when_no_override_set_then_format_is_kept() {
    if std::env::var("LOG_FORMAT").is_ok() {
        return;
    }

    let config = TracingConfig::new(Environment::Local, false).with_env_override();

    assert!(!config.json_format);
}
