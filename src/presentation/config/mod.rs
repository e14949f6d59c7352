mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{ExtractionSettings, LlmSettings, LoggingSettings, ServerSettings, Settings};
