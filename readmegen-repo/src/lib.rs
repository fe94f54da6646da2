//! Readmegen Repository - Repository acquisition
//!
//! Materializes a working copy for the analysis pipeline: parses repository
//! identifiers, clones through the system git command, and owns the temporary
//! holding area for the lifetime of a run.

pub mod processor;

pub use processor::*;
