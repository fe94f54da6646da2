//! README generator - glues the prompt template to the LLM client

use crate::client::{create_auto_client, ReadmegenLlmClient};
use crate::prompts::{create_readme_prompt, README_SYSTEM_PROMPT};
use readmegen_core::{LlmConfig, ReadmegenResult, RepositoryRecord};
use tracing::info;

/// Generates README markdown from an analysis record
pub struct ReadmeGenerator {
    client: ReadmegenLlmClient,
}

impl ReadmeGenerator {
    /// Create a generator with an explicit LLM configuration
    pub async fn new(config: LlmConfig) -> ReadmegenResult<Self> {
        Ok(Self {
            client: ReadmegenLlmClient::new(config).await?,
        })
    }

    /// Create a generator with provider auto-detection from the environment
    pub async fn from_env() -> ReadmegenResult<Self> {
        Ok(Self {
            client: create_auto_client().await?,
        })
    }

    /// Generate README text for the given record.
    ///
    /// The record is serialized to the same pretty-printed JSON form that is
    /// persisted to disk, so the prompt and the saved document always agree.
    pub async fn generate(&self, record: &RepositoryRecord) -> ReadmegenResult<String> {
        let record_json = serde_json::to_string_pretty(record)?;
        let prompt = create_readme_prompt(&record_json);

        info!(
            repository = %record.basic_info.repository_name,
            provider = %self.client.config().provider,
            "Generating README"
        );

        self.client
            .generate_with_system(README_SYSTEM_PROMPT, &prompt)
            .await
    }
}
