//! Core data type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Repository information - basic metadata about a repository to acquire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub owner: String,
    pub name: String,
    pub repo_type: RepoType,
    pub url: String,
    pub local_path: Option<String>,
}

/// Supported repository hosts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepoType {
    GitHub,
    GitLab,
    Bitbucket,
    Local,
}

/// The root output of an analysis run
///
/// Created once per run, immutable after construction, serialized to a
/// pretty-printed JSON document. Every field is an independent derivation of
/// the working tree; no extractor sees another extractor's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub basic_info: BasicInfo,
    pub directory_structure: BTreeMap<String, Vec<String>>,
    pub dependencies: BTreeMap<String, EcosystemDependencies>,
    pub code_stats: CodeStats,
    pub recent_commits: Vec<Commit>,
    pub documentation_hints: DocumentationHints,
}

/// Basic repository identity, derived from the remote URL and active branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub repository_name: String,
    pub owner: String,
    pub default_branch: String,
    pub remote_url: String,
}

/// One historical commit, projected from the version-control log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    pub date: String,
    pub message: String,
}

/// Ecosystem-specific dependency listing
///
/// The shape differs per ecosystem: nodejs carries two named groups, python a
/// flat requirement list, rust a name -> version map. Untagged so the JSON
/// matches each ecosystem's natural form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EcosystemDependencies {
    Groups {
        dependencies: BTreeMap<String, String>,
        #[serde(rename = "devDependencies")]
        dev_dependencies: BTreeMap<String, String>,
    },
    Packages(BTreeMap<String, String>),
    Requirements(Vec<String>),
}

/// Flat `<language>_files` / `<language>_lines` counters
///
/// `skipped_files` counts files whose contents could not be decoded as text;
/// their file counter still increments but no line count is added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeStats {
    #[serde(flatten)]
    pub counts: BTreeMap<String, u64>,
    #[serde(default)]
    pub skipped_files: u64,
}

/// Heuristically detected code markers, pooled across all source files
///
/// Each list is deduplicated and sorted ascending. `skipped_files` counts
/// source files that could not be read at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationHints {
    pub todos: Vec<String>,
    pub api_endpoints: Vec<String>,
    pub functions: Vec<String>,
    pub classes: Vec<String>,
    #[serde(default)]
    pub skipped_files: u64,
}

/// LLM configuration for the README generation step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub provider: String,
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: None,
            base_url: None,
            temperature: 0.0,
            max_tokens: Some(4000),
        }
    }
}
