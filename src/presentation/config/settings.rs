use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
    pub extraction: ExtractionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub provider: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: String,
    pub chat_model: String,
    pub max_tokens: usize,
    pub temperature: f32,
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json_format: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionSettings {
    pub timeout_seconds: u64,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.{environment}` and `APP_*` variables.
    ///
    /// Nested keys use a double underscore, e.g. `APP_SERVER__PORT=8080`.
    /// `GROQ_API_KEY` overrides `llm.api_key`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_override_option("llm.api_key", std::env::var("GROQ_API_KEY").ok())?
            .build()?
            .try_deserialize()
    }

    /// Defaults plus the environment's settings file, without process variables.
    pub fn from_files(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?.build()?.try_deserialize()
    }

    fn builder(
        environment: Environment,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.cors_origin", "http://localhost:5173")?
            .set_default("server.max_upload_bytes", 5 * 1024 * 1024)?
            .set_default("llm.provider", "groq")?
            .set_default("llm.api_key", "")?
            .set_default("llm.chat_model", "mixtral-8x7b-32768")?
            .set_default("llm.max_tokens", 2000)?
            .set_default("llm.temperature", 0.3)?
            .set_default("llm.timeout_seconds", 60)?
            .set_default("logging.level", "info")?
            .set_default("logging.json_format", false)?
            .set_default("extraction.timeout_seconds", 30)?
            .add_source(File::with_name(&environment.settings_file()).required(false)))
    }
}
