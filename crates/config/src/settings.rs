//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Model gateway configuration
    #[serde(default)]
    pub model: ModelConfig,

    /// Intent pre-filter configuration
    #[serde(default)]
    pub prefilter: PrefilterConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Model gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Path or name of the model runner executable
    #[serde(default = "default_model_binary")]
    pub binary: String,

    /// Model name/tag passed to the runner
    #[serde(default = "default_model_name")]
    pub name: String,

    /// Hard timeout for a single generation, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_model_binary() -> String {
    "ollama".to_string()
}

fn default_model_name() -> String {
    "qwen".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            binary: default_model_binary(),
            name: default_model_name(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Intent pre-filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefilterConfig {
    /// Minimum partial-similarity score (0-100) for a fuzzy greeting match
    #[serde(default = "default_greeting_threshold")]
    pub greeting_threshold: u8,
}

fn default_greeting_threshold() -> u8 {
    85
}

impl Default for PrefilterConfig {
    fn default() -> Self {
        Self {
            greeting_threshold: default_greeting_threshold(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON instead of human-readable text
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefilter.greeting_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                field: "prefilter.greeting_threshold".to_string(),
                message: format!(
                    "Must be between 0 and 100, got {}",
                    self.prefilter.greeting_threshold
                ),
            });
        }

        if self.model.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "model.timeout_secs".to_string(),
                message: "Timeout must be at least 1 second".to_string(),
            });
        }

        if self.model.binary.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model.binary".to_string(),
                message: "Model binary path must not be empty".to_string(),
            });
        }

        if self.model.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model.name".to_string(),
                message: "Model name must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Load settings from config files and environment variables.
///
/// Priority: env vars > `config/{env}.yaml` > `config/default.yaml` > defaults.
/// Missing files are not an error; the corresponding layer is skipped.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    let default_path = Path::new("config/default.yaml");
    if default_path.exists() {
        builder = builder.add_source(File::from(default_path));
    }

    if let Some(env_name) = env {
        let env_path = format!("config/{}.yaml", env_name);
        if Path::new(&env_path).exists() {
            builder = builder.add_source(File::with_name(&env_path));
        } else {
            tracing::warn!(path = %env_path, "Environment config file not found, skipping");
        }
    }

    builder = builder.add_source(
        Environment::with_prefix("BANKING_AGENT")
            .separator("__")
            .try_parsing(true),
    );

    let settings: Settings = builder.build()?.try_deserialize()?;
    settings.validate()?;
    Ok(settings)
}
