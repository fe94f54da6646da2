//! LLM client integration using siumai
//!
//! Unified interface over the providers this tool supports, with automatic
//! provider detection from the environment.

use readmegen_core::{ErrorContext, LlmConfig, ReadmegenError, ReadmegenResult};
use siumai::prelude::*;
use std::time::Instant;
use tracing::{debug, info, warn};

fn llm_error(message: String, provider: &str) -> ReadmegenError {
    ReadmegenError::Llm {
        message,
        provider: Some(provider.to_string()),
        context: ErrorContext::new("llm_client"),
    }
}

/// Unified LLM client that supports multiple providers
pub struct ReadmegenLlmClient {
    client: Box<dyn LlmClient>,
    config: LlmConfig,
}

impl ReadmegenLlmClient {
    /// Create a new LLM client
    pub async fn new(config: LlmConfig) -> ReadmegenResult<Self> {
        let client = Self::build_client(&config).await?;

        info!(
            provider = %config.provider,
            model = %config.model,
            "Created LLM client"
        );

        Ok(Self { client, config })
    }

    /// Build the appropriate siumai client based on configuration
    async fn build_client(config: &LlmConfig) -> ReadmegenResult<Box<dyn LlmClient>> {
        match config.provider.as_str() {
            "openai" => {
                let api_key = config
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                    .ok_or_else(|| llm_error("OpenAI API key not found".to_string(), "openai"))?;

                let mut builder = LlmBuilder::new()
                    .openai()
                    .api_key(&api_key)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }
                if let Some(base_url) = &config.base_url {
                    builder = builder.base_url(base_url);
                }

                let client = builder.build().await.map_err(|e| {
                    llm_error(format!("Failed to build OpenAI client: {}", e), "openai")
                })?;

                Ok(Box::new(client))
            }
            "anthropic" => {
                let api_key = config
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
                    .ok_or_else(|| {
                        llm_error("Anthropic API key not found".to_string(), "anthropic")
                    })?;

                let mut builder = LlmBuilder::new()
                    .anthropic()
                    .api_key(&api_key)
                    .model(&config.model)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                let client = builder.build().await.map_err(|e| {
                    llm_error(format!("Failed to build Anthropic client: {}", e), "anthropic")
                })?;

                Ok(Box::new(client))
            }
            "ollama" => {
                let base_url = config
                    .base_url
                    .clone()
                    .unwrap_or_else(|| "http://localhost:11434".to_string());

                let mut builder = LlmBuilder::new()
                    .ollama()
                    .model(&config.model)
                    .base_url(&base_url)
                    .temperature(config.temperature);

                if let Some(max_tokens) = config.max_tokens {
                    builder = builder.max_tokens(max_tokens);
                }

                let client = builder.build().await.map_err(|e| {
                    llm_error(format!("Failed to build Ollama client: {}", e), "ollama")
                })?;

                Ok(Box::new(client))
            }
            provider => Err(llm_error(
                format!("Unsupported LLM provider: {}", provider),
                provider,
            )),
        }
    }

    /// Generate a response using the LLM
    pub async fn generate(&self, messages: Vec<ChatMessage>) -> ReadmegenResult<String> {
        let start_time = Instant::now();

        debug!("Generating response with {} messages", messages.len());

        let response = self
            .client
            .chat(messages)
            .await
            .map_err(|e| llm_error(format!("LLM generation failed: {}", e), &self.config.provider))?;

        if let Some(content) = response.content_text() {
            info!(
                duration_ms = start_time.elapsed().as_millis() as u64,
                chars = content.len(),
                "Generated response"
            );
            Ok(content.to_string())
        } else {
            Err(llm_error(
                "No text content in LLM response".to_string(),
                &self.config.provider,
            ))
        }
    }

    /// Generate a response with system and user messages
    pub async fn generate_with_system(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> ReadmegenResult<String> {
        let messages = vec![system!(system_prompt), user!(user_message)];
        self.generate(messages).await
    }

    /// Get the current configuration
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }
}

/// Provider configurations this tool knows how to auto-detect
pub mod configs {
    use readmegen_core::LlmConfig;

    pub fn openai_gpt4o_mini() -> LlmConfig {
        LlmConfig {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            ..LlmConfig::default()
        }
    }

    pub fn anthropic_claude_haiku() -> LlmConfig {
        LlmConfig {
            provider: "anthropic".to_string(),
            model: "claude-3-5-haiku-latest".to_string(),
            ..LlmConfig::default()
        }
    }

    pub fn ollama_llama3(base_url: Option<String>) -> LlmConfig {
        LlmConfig {
            provider: "ollama".to_string(),
            model: "llama3.2".to_string(),
            base_url: base_url.or_else(|| Some("http://localhost:11434".to_string())),
            ..LlmConfig::default()
        }
    }
}

/// Create a client with automatic provider detection from the environment
pub async fn create_auto_client() -> ReadmegenResult<ReadmegenLlmClient> {
    let providers = vec![
        ("openai", "OPENAI_API_KEY", configs::openai_gpt4o_mini()),
        (
            "anthropic",
            "ANTHROPIC_API_KEY",
            configs::anthropic_claude_haiku(),
        ),
    ];

    for (provider_name, env_var, config) in providers {
        if std::env::var(env_var).is_ok() {
            info!("Auto-detected {} provider", provider_name);
            match ReadmegenLlmClient::new(config).await {
                Ok(client) => return Ok(client),
                Err(e) => {
                    warn!("Failed to create {} client: {}", provider_name, e);
                    continue;
                }
            }
        }
    }

    // Ollama needs no API key and serves as the fallback
    info!("Trying Ollama as fallback");
    ReadmegenLlmClient::new(configs::ollama_llama3(None)).await
}
