//! Subprocess-backed model gateway
//!
//! Each generation shells out to a local model runner (Ollama by
//! default), writes the rendered prompt to its stdin and reads the reply
//! from stdout. One process per request; the child is killed if the
//! request is dropped or times out.

use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::LlmError;

/// Configuration for the Ollama subprocess backend
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Path or name of the model runner executable
    pub binary: String,
    /// Model name/tag passed to the runner
    pub model: String,
    /// Hard deadline for a single generation
    pub timeout: Duration,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            binary: "ollama".to_string(),
            model: "qwen".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Abstraction over the model the session layer generates replies with
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Generate one assistant reply for the latest user message.
    ///
    /// An empty string is a valid success; the caller decides the
    /// fallback wording.
    async fn generate(&self, system_prompt: &str, user_message: &str)
        -> Result<String, LlmError>;

    /// Model identifier used in logs
    fn model_name(&self) -> &str;
}

/// Render the flat prompt the model runner consumes. Only the latest
/// user message is included.
fn render_prompt(system_prompt: &str, user_message: &str) -> String {
    format!("{system_prompt}\n\nUser: {user_message}\nAssistant:")
}

/// Gateway that runs `<binary> run <model>` per request
pub struct OllamaProcessBackend {
    config: OllamaConfig,
}

impl OllamaProcessBackend {
    pub fn new(config: OllamaConfig) -> Self {
        Self { config }
    }

    /// Probe the runner with `<binary> list` to see whether it is
    /// reachable. Used for a startup warning only; generation does not
    /// depend on it.
    pub async fn is_available(&self) -> bool {
        let probe = Command::new(&self.config.binary)
            .arg("list")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        matches!(
            tokio::time::timeout(Duration::from_secs(2), probe).await,
            Ok(Ok(status)) if status.success()
        )
    }

    async fn run_once(&self, prompt: &str) -> Result<String, LlmError> {
        let mut child = Command::new(&self.config.binary)
            .arg("run")
            .arg(&self.config.model)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| LlmError::Spawn(format!("{}: {}", self.config.binary, e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| LlmError::Process("stdin unavailable".to_string()))?;
        stdin.write_all(prompt.as_bytes()).await?;
        // Close stdin so the runner sees EOF and starts generating
        drop(stdin);

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(LlmError::Process(stderr.trim().to_string()));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| LlmError::InvalidOutput(e.to_string()))?;
        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl ModelGateway for OllamaProcessBackend {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, LlmError> {
        let prompt = render_prompt(system_prompt, user_message);
        let started = Instant::now();

        let result = tokio::time::timeout(self.config.timeout, self.run_once(&prompt))
            .await
            .map_err(|_| LlmError::Timeout)?;

        match &result {
            Ok(reply) => tracing::debug!(
                model = %self.config.model,
                elapsed_ms = started.elapsed().as_millis() as u64,
                reply_chars = reply.chars().count(),
                "Model generation complete"
            ),
            Err(e) => tracing::warn!(
                model = %self.config.model,
                error = %e,
                "Model generation failed"
            ),
        }

        result
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt_format() {
        let prompt = render_prompt("SYSTEM", "hello there");
        assert_eq!(prompt, "SYSTEM\n\nUser: hello there\nAssistant:");
    }

    #[test]
    fn test_default_config() {
        let config = OllamaConfig::default();
        assert_eq!(config.binary, "ollama");
        assert_eq!(config.model, "qwen");
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_generate_missing_binary_is_spawn_error() {
        let backend = OllamaProcessBackend::new(OllamaConfig {
            binary: "/nonexistent/model-runner".to_string(),
            ..OllamaConfig::default()
        });
        let err = backend.generate("SYSTEM", "hi").await.unwrap_err();
        assert!(matches!(err, LlmError::Spawn(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_is_available_false_for_missing_binary() {
        let backend = OllamaProcessBackend::new(OllamaConfig {
            binary: "/nonexistent/model-runner".to_string(),
            ..OllamaConfig::default()
        });
        assert!(!backend.is_available().await);
    }

    #[tokio::test]
    async fn test_model_name() {
        let backend = OllamaProcessBackend::new(OllamaConfig::default());
        assert_eq!(backend.model_name(), "qwen");
    }
}
