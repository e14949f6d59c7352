use crate::presentation::config::LoggingSettings;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub default_level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_settings(settings: &LoggingSettings, environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
            default_level: settings.level.clone(),
            json_format: settings.json_format
                || std::env::var("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
        }
    }

    /// Filter used when `RUST_LOG` is unset.
    pub fn default_filter(&self) -> String {
        format!(
            "{},resume_review=debug,tower_http=debug",
            self.default_level
        )
    }
}
