//! Readmegen LLM - README generation from an analysis record
//!
//! Thin downstream step: templates the serialized `RepositoryRecord` into a
//! prompt and exchanges it with an LLM provider through siumai. The generated
//! text is opaque to the rest of the system.

pub mod client;
pub mod generator;
pub mod prompts;

pub use client::*;
pub use generator::*;
pub use prompts::*;
