use crate::presentation::config::Environment;

const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Output settings for the global subscriber.
#[derive(Debug, Clone, Copy)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn new(environment: Environment, json_format: bool) -> Self {
        Self {
            environment,
            json_format,
        }
    }

    /// `LOG_FORMAT=json|text` wins over the configured format.
    pub fn with_env_override(self) -> Self {
        match std::env::var(LOG_FORMAT_VAR) {
            Ok(format) if format.eq_ignore_ascii_case("json") => Self::new(self.environment, true),
            Ok(format) if format.eq_ignore_ascii_case("text") => Self::new(self.environment, false),
            _ => self,
        }
    }
}
