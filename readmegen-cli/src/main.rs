//! Readmegen CLI - Command-line interface for repository analysis
//!
//! Analyzes a repository into a structured JSON record and, optionally, hands
//! that record to an LLM to draft a README.

use clap::Parser;
use readmegen_analysis::{analyze_repository, AnalyzerOptions};
use readmegen_core::{init_logging, LoggingConfig, ReadmegenError, ReadmegenResult};
use readmegen_llm::ReadmeGenerator;
use readmegen_repo::{AcquireOptions, RepositoryProcessor, RepositoryWorkspace};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "readmegen")]
#[command(about = "Analyze a repository and generate README data")]
#[command(version)]
struct Cli {
    /// Repository identifier: owner/name shorthand, full URL, or local path
    repo: String,

    /// Access token for private repositories
    #[arg(short, long)]
    token: Option<String>,

    /// Path for the analysis JSON document
    #[arg(short, long, default_value = "readme_data.json")]
    output: PathBuf,

    /// Also generate a README at this path (requires an LLM provider)
    #[arg(long)]
    readme: Option<PathBuf>,

    /// Number of recent commits to include
    #[arg(long, default_value = "10")]
    commits: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ReadmegenResult<()> {
    let cli = Cli::parse();

    let mut logging_config = LoggingConfig::default();
    if cli.verbose {
        logging_config.level = "debug".to_string();
    }
    init_logging(&logging_config).map_err(|e| ReadmegenError::Config {
        message: format!("Failed to initialize logging: {}", e),
        source: Some(e),
        context: readmegen_core::ErrorContext::new("cli").with_operation("init_logging"),
    })?;

    info!("Starting readmegen v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            // Diagnostic first, then re-raise so the process exits non-zero.
            e.log();
            Err(e)
        }
    }
}

async fn run(cli: &Cli) -> ReadmegenResult<()> {
    let processor = RepositoryProcessor::new();
    let workspace = processor
        .acquire(
            &cli.repo,
            &AcquireOptions {
                token: cli.token.clone(),
            },
        )
        .await?;

    let outcome = analyze_and_emit(cli, &workspace).await;

    // The temporary holding area is released whether or not extraction
    // succeeded; a failed removal is logged inside close and never fatal.
    workspace.close();

    outcome
}

async fn analyze_and_emit(cli: &Cli, workspace: &RepositoryWorkspace) -> ReadmegenResult<()> {
    let options = AnalyzerOptions {
        commit_limit: cli.commits,
    };
    let record = analyze_repository(workspace.repo_path(), &options)?;

    // The record is complete by this point; a failed run never leaves a
    // partial document behind.
    let json = serde_json::to_string_pretty(&record)?;
    tokio::fs::write(&cli.output, &json).await?;

    println!(
        "Repository analysis complete. Data saved to {}",
        cli.output.display()
    );

    if let Some(readme_path) = &cli.readme {
        let generator = ReadmeGenerator::from_env().await?;
        let readme = generator.generate(&record).await?;
        tokio::fs::write(readme_path, readme).await?;
        println!("README written to {}", readme_path.display());
    }

    Ok(())
}
