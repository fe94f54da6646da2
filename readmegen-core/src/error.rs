//! Unified error handling system
//!
//! Provides structured error types with context, recovery suggestions, and proper error chaining

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

pub type ReadmegenResult<T> = Result<T, ReadmegenError>;

/// Error context providing additional information for debugging and recovery
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Unique error ID for tracking
    pub error_id: String,
    /// Timestamp when error occurred
    pub timestamp: DateTime<Utc>,
    /// Component where error originated
    pub component: String,
    /// Operation being performed when error occurred
    pub operation: Option<String>,
    /// Recovery suggestions
    pub recovery_suggestions: Vec<String>,
}

impl ErrorContext {
    pub fn new(component: &str) -> Self {
        Self {
            error_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            component: component.to_string(),
            operation: None,
            recovery_suggestions: Vec::new(),
        }
    }

    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.recovery_suggestions.push(suggestion.to_string());
        self
    }
}

/// Main error type for the readmegen system
#[derive(Error, Debug)]
pub enum ReadmegenError {
    #[error("Repository error: {message}")]
    Repository {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Git error: {message}")]
    Git {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Analysis error: {message}")]
    Analysis {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("README generation error: {message}")]
    Generation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        context: ErrorContext,
    },

    #[error("LLM error: {message}")]
    Llm {
        message: String,
        provider: Option<String>,
        context: ErrorContext,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ReadmegenError {
    /// Get the error context
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            ReadmegenError::Repository { context, .. } => Some(context),
            ReadmegenError::Git { context, .. } => Some(context),
            ReadmegenError::Analysis { context, .. } => Some(context),
            ReadmegenError::Generation { context, .. } => Some(context),
            ReadmegenError::Config { context, .. } => Some(context),
            ReadmegenError::Llm { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        error!(
            error_id = ?self.context().map(|c| &c.error_id),
            error = %self,
            "Error occurred"
        );
    }
}
