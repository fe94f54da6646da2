//! Repository analyzer - composes the extraction passes into one record

use crate::dependencies::extract_dependencies;
use crate::git::GitReader;
use crate::hints::extract_documentation_hints;
use crate::stats::analyze_code_stats;
use crate::structure::analyze_directory_structure;
use readmegen_core::{ReadmegenResult, RepositoryRecord};
use std::path::Path;
use tracing::info;

/// Options for an analysis run
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Maximum number of commits to project into the record
    pub commit_limit: usize,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self { commit_limit: 10 }
    }
}

/// Run every extraction pass over a working copy and aggregate the results.
///
/// Each pass walks the tree independently; nothing is shared between them,
/// so the record is a pure function of the tree and the git log. Resolution
/// failures (no remote, detached HEAD) abort the run; per-file read failures
/// inside the tree passes are recovered locally and only counted.
pub fn analyze_repository<P: AsRef<Path>>(
    repo_path: P,
    options: &AnalyzerOptions,
) -> ReadmegenResult<RepositoryRecord> {
    let path = repo_path.as_ref();
    let git = GitReader::new(path);

    info!(repo_path = %path.display(), "Starting repository analysis");

    let basic_info = git.basic_info()?;
    let directory_structure = analyze_directory_structure(path);
    let dependencies = extract_dependencies(path);
    let code_stats = analyze_code_stats(path);
    let recent_commits = git.commit_history(options.commit_limit)?;
    let documentation_hints = extract_documentation_hints(path);

    info!(
        repository = %basic_info.repository_name,
        directories = directory_structure.len(),
        ecosystems = dependencies.len(),
        commits = recent_commits.len(),
        "Repository analysis complete"
    );

    Ok(RepositoryRecord {
        basic_info,
        directory_structure,
        dependencies,
        code_stats,
        recent_commits,
        documentation_hints,
    })
}
