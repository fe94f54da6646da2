//! End-to-end tests for the extraction pipeline over real git working copies

use readmegen_analysis::{analyze_repository, AnalyzerOptions, GitReader};
use readmegen_core::RepositoryRecord;
use std::fs;
use std::path::Path;
use std::process::Command;

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args([
            "-c",
            "user.name=Test User",
            "-c",
            "user.email=test@example.com",
        ])
        .args(args)
        .status()
        .expect("git must be runnable in tests");
    assert!(status.success(), "git {:?} failed", args);
}

fn init_repo(dir: &Path, remote: &str, commit_messages: &[&str]) {
    git(dir, &["init", "--quiet"]);
    git(dir, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(dir, &["remote", "add", "origin", remote]);
    for message in commit_messages {
        git(dir, &["commit", "--allow-empty", "--quiet", "-m", message]);
    }
}

#[test]
fn commit_history_is_bounded_and_reverse_chronological() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(
        tmp.path(),
        "https://github.com/acme/widget.git",
        &["first", "second", "third"],
    );

    let reader = GitReader::new(tmp.path());

    // Fewer commits than the limit: all of them come back.
    let all = reader.commit_history(10).unwrap();
    assert_eq!(all.len(), 3);
    let messages: Vec<&str> = all.iter().map(|c| c.message.as_str()).collect();
    assert_eq!(messages, vec!["third", "second", "first"]);
    assert!(all.iter().all(|c| c.author == "Test User"));
    assert!(all.iter().all(|c| !c.hash.is_empty() && !c.date.is_empty()));

    let bounded = reader.commit_history(2).unwrap();
    assert_eq!(bounded.len(), 2);
    assert_eq!(bounded[0].message, "third");
}

#[test]
fn multi_line_commit_messages_are_kept_and_trimmed() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(
        tmp.path(),
        "https://github.com/acme/widget.git",
        &["subject line\n\nbody paragraph"],
    );

    let commits = GitReader::new(tmp.path()).commit_history(10).unwrap();
    assert_eq!(commits[0].message, "subject line\n\nbody paragraph");
}

#[test]
fn basic_info_derives_owner_and_name_from_https_remote() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(tmp.path(), "https://github.com/acme/widget.git", &["init"]);

    let info = GitReader::new(tmp.path()).basic_info().unwrap();
    assert_eq!(info.repository_name, "widget");
    assert_eq!(info.owner, "acme");
    assert_eq!(info.default_branch, "main");
    assert_eq!(info.remote_url, "https://github.com/acme/widget.git");
}

#[test]
fn basic_info_strips_host_prefix_from_ssh_remote() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(tmp.path(), "git@github.com:acme/widget.git", &["init"]);

    let info = GitReader::new(tmp.path()).basic_info().unwrap();
    assert_eq!(info.repository_name, "widget");
    assert_eq!(info.owner, "acme");
}

#[test]
fn missing_remote_is_a_fatal_resolution_failure() {
    let tmp = tempfile::tempdir().unwrap();
    git(tmp.path(), &["init", "--quiet"]);
    git(tmp.path(), &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(tmp.path(), &["commit", "--allow-empty", "--quiet", "-m", "init"]);

    assert!(GitReader::new(tmp.path()).basic_info().is_err());
}

#[test]
fn detached_head_is_a_fatal_resolution_failure() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(tmp.path(), "https://github.com/acme/widget.git", &["init"]);
    git(tmp.path(), &["checkout", "--quiet", "--detach", "HEAD"]);

    assert!(GitReader::new(tmp.path()).active_branch().is_err());
}

#[test]
fn full_analysis_produces_a_round_trippable_record() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(
        tmp.path(),
        "https://github.com/acme/widget.git",
        &["first", "second"],
    );

    fs::create_dir(tmp.path().join("src")).unwrap();
    fs::write(
        tmp.path().join("src/app.py"),
        "# TODO: fix this\ndef handler():\n    pass\n\nclass Handler:\n    pass\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join("requirements.txt"),
        "flask>=2.0\n# comment\n",
    )
    .unwrap();
    fs::write(tmp.path().join(".env"), "SECRET=1\n").unwrap();

    let record = analyze_repository(tmp.path(), &AnalyzerOptions::default()).unwrap();

    assert_eq!(record.basic_info.repository_name, "widget");
    assert_eq!(record.directory_structure["src"], vec!["app.py"]);
    assert!(!record.directory_structure["root"].contains(&".env".to_string()));
    assert!(record.dependencies.contains_key("python"));
    assert_eq!(record.code_stats.counts["python_files"], 1);
    assert_eq!(record.code_stats.counts["python_lines"], 6);
    assert_eq!(record.recent_commits.len(), 2);
    assert_eq!(record.documentation_hints.todos, vec!["fix this"]);
    assert_eq!(record.documentation_hints.functions, vec!["handler"]);
    assert_eq!(record.documentation_hints.classes, vec!["Handler"]);

    // Persisted form round-trips losslessly.
    let json = serde_json::to_string_pretty(&record).unwrap();
    let parsed: RepositoryRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);

    // The persisted document exposes exactly the six record sections.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    for key in [
        "basic_info",
        "directory_structure",
        "dependencies",
        "code_stats",
        "recent_commits",
        "documentation_hints",
    ] {
        assert!(value.get(key).is_some(), "missing section {key}");
    }
}

#[test]
fn tree_without_manifests_yields_empty_dependencies() {
    let tmp = tempfile::tempdir().unwrap();
    init_repo(tmp.path(), "https://github.com/acme/widget.git", &["init"]);
    fs::write(tmp.path().join("main.py"), "print('hi')\n").unwrap();

    let record = analyze_repository(tmp.path(), &AnalyzerOptions::default()).unwrap();
    assert!(record.dependencies.is_empty());
}
