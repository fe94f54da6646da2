//! Readmegen Core - Shared data structures and infrastructure
//!
//! This module defines the record types, the unified error type, and logging
//! setup used across the readmegen workspace.

pub mod error;
pub mod logging;
pub mod types;

pub use error::*;
pub use logging::*;
pub use types::*;

// Re-export commonly used external types
pub use tracing;
