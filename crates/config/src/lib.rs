//! Configuration management for the banking assistant agent
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, then `config/{env}.yaml`)
//! - Environment variables (`BANKING_AGENT_` prefix)
//!
//! Priority: env vars > `config/{env}.yaml` > `config/default.yaml` > defaults.

pub mod settings;

pub use settings::{
    load_settings, ModelConfig, ObservabilityConfig, PrefilterConfig, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
