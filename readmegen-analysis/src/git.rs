//! Git metadata reader
//!
//! Reads remote, branch, and commit history from a working copy through the
//! system `git` binary - simple and reliable, and the only git interface the
//! pipeline needs.

use readmegen_core::{BasicInfo, Commit, ErrorContext, ReadmegenError, ReadmegenResult};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

const FIELD_SEP: char = '\u{1f}';
const RECORD_SEP: char = '\u{1e}';

/// Read-only view over a repository's version-control metadata
#[derive(Debug, Clone)]
pub struct GitReader {
    repo_path: PathBuf,
}

impl GitReader {
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    fn git(&self, args: &[&str]) -> ReadmegenResult<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo_path)
            .args(args)
            .output()
            .map_err(|e| ReadmegenError::Git {
                message: format!("Failed to execute git: {}", e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("git_reader")
                    .with_operation("run_git")
                    .with_suggestion("Ensure git is installed and accessible"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ReadmegenError::Git {
                message: format!("git {} failed: {}", args.join(" "), stderr.trim()),
                source: None,
                context: ErrorContext::new("git_reader").with_operation("run_git"),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// First configured remote's URL.
    ///
    /// A repository without any remote is a fatal resolution failure.
    pub fn remote_url(&self) -> ReadmegenResult<String> {
        let remotes = self.git(&["remote"])?;
        let first = remotes
            .lines()
            .next()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ReadmegenError::Git {
                message: "Repository has no configured remote".to_string(),
                source: None,
                context: ErrorContext::new("git_reader")
                    .with_operation("remote_url")
                    .with_suggestion("Analyze a cloned repository, not a bare working tree"),
            })?;

        Ok(self.git(&["remote", "get-url", first])?.trim().to_string())
    }

    /// Name of the active branch.
    ///
    /// A detached HEAD cannot be resolved to a branch and is fatal.
    pub fn active_branch(&self) -> ReadmegenResult<String> {
        let name = self
            .git(&["rev-parse", "--abbrev-ref", "HEAD"])?
            .trim()
            .to_string();

        if name == "HEAD" {
            return Err(ReadmegenError::Git {
                message: "HEAD is detached; no active branch to report".to_string(),
                source: None,
                context: ErrorContext::new("git_reader")
                    .with_operation("active_branch")
                    .with_suggestion("Check out a branch before analyzing"),
            });
        }

        Ok(name)
    }

    /// Derive repository identity from the remote URL and active branch.
    pub fn basic_info(&self) -> ReadmegenResult<BasicInfo> {
        let remote_url = self.remote_url()?;
        let default_branch = self.active_branch()?;

        let trimmed = remote_url.strip_suffix(".git").unwrap_or(&remote_url);
        let mut segments = trimmed.rsplit('/');
        let repository_name = segments.next().unwrap_or_default().to_string();
        let owner_segment = segments.next().unwrap_or_default();
        // SSH remotes look like git@host:owner/name; the host prefix rides
        // along in the owner segment until the colon is stripped.
        let owner = owner_segment
            .rsplit(':')
            .next()
            .unwrap_or(owner_segment)
            .to_string();

        debug!(
            repository = %repository_name,
            owner = %owner,
            branch = %default_branch,
            "Resolved basic repository info"
        );

        Ok(BasicInfo {
            repository_name,
            owner,
            default_branch,
            remote_url,
        })
    }

    /// First `limit` commits, most recent first.
    ///
    /// Returns everything the repository has when it holds fewer than
    /// `limit` commits; an unborn branch yields an empty list.
    pub fn commit_history(&self, limit: usize) -> ReadmegenResult<Vec<Commit>> {
        let format = format!(
            "%H{fs}%an{fs}%ad{fs}%B{rs}",
            fs = FIELD_SEP,
            rs = RECORD_SEP
        );
        let log = match self.git(&[
            "log",
            "-n",
            &limit.to_string(),
            "--date=iso",
            &format!("--pretty=format:{format}"),
        ]) {
            Ok(log) => log,
            Err(e) => {
                // A repository with no commits yet has no log to read.
                if format!("{e}").contains("does not have any commits") {
                    return Ok(Vec::new());
                }
                return Err(e);
            }
        };

        let commits = log
            .split(RECORD_SEP)
            .filter(|record| !record.trim().is_empty())
            .filter_map(|record| {
                let mut fields = record.trim_start_matches('\n').splitn(4, FIELD_SEP);
                let hash = fields.next()?.to_string();
                let author = fields.next()?.to_string();
                let date = fields.next()?.to_string();
                let message = fields.next()?.trim().to_string();
                Some(Commit {
                    hash,
                    author,
                    date,
                    message,
                })
            })
            .collect();

        Ok(commits)
    }
}
