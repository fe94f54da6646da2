//! Readmegen Analysis - Repository metadata extraction pipeline
//!
//! Five independent read-only passes over a checked-out working tree (basic
//! info, directory structure, dependency manifests, code statistics,
//! documentation hints) plus a bounded commit-history reader, composed into
//! one JSON-serializable `RepositoryRecord`.
//!
//! Every pass is a pure derivation of the tree at the moment of the call:
//! nothing here mutates the tree, and no pass depends on another's output.

pub mod analyzer;
pub mod dependencies;
pub mod git;
pub mod hints;
pub mod patterns;
pub mod stats;
pub mod structure;
pub mod walker;

pub use analyzer::*;
pub use dependencies::*;
pub use git::*;
pub use hints::*;
pub use stats::*;
pub use structure::*;
pub use walker::*;
