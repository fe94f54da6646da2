//! Code statistics extractor

use crate::patterns::LANGUAGE_PATTERNS;
use crate::walker::walk_tree;
use readmegen_core::CodeStats;
use std::path::Path;
use tracing::{debug, warn};

/// Count files and lines per language across the whole tree.
///
/// Every file whose name matches a language pattern increments that
/// language's `<lang>_files` counter; its newline count is added to
/// `<lang>_lines` when the file decodes as text. A file that cannot be
/// decoded keeps its file count but is recorded in `skipped_files` rather
/// than failing the pass.
pub fn analyze_code_stats<P: AsRef<Path>>(repo_path: P) -> CodeStats {
    let mut stats = CodeStats::default();

    for (dir, files) in walk_tree(repo_path.as_ref()) {
        for file in files {
            for (lang, pattern) in LANGUAGE_PATTERNS.iter() {
                if !pattern.is_match(&file) {
                    continue;
                }

                *stats.counts.entry(format!("{lang}_files")).or_insert(0) += 1;

                match std::fs::read_to_string(dir.join(&file)) {
                    Ok(text) => {
                        *stats.counts.entry(format!("{lang}_lines")).or_insert(0) +=
                            text.lines().count() as u64;
                    }
                    Err(_) => {
                        stats.skipped_files += 1;
                    }
                }
            }
        }
    }

    if stats.skipped_files > 0 {
        warn!(
            skipped = stats.skipped_files,
            "Some files could not be decoded; their line counts are missing"
        );
    }
    debug!(counters = stats.counts.len(), "Code statistics collected");
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn counts_files_and_lines_per_language() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.py"), "x = 1\ny = 2\n").unwrap();
        fs::write(tmp.path().join("b.py"), "z = 3\n").unwrap();
        fs::create_dir(tmp.path().join("web")).unwrap();
        fs::write(tmp.path().join("web/index.html"), "<html></html>\n").unwrap();

        let stats = analyze_code_stats(tmp.path());
        assert_eq!(stats.counts["python_files"], 2);
        assert_eq!(stats.counts["python_lines"], 3);
        assert_eq!(stats.counts["html_files"], 1);
        assert_eq!(stats.counts["html_lines"], 1);
        assert_eq!(stats.skipped_files, 0);
    }

    #[test]
    fn extension_matching_is_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("LEGACY.JAVA"), "class A {}\n").unwrap();

        let stats = analyze_code_stats(tmp.path());
        assert_eq!(stats.counts["java_files"], 1);
    }

    #[test]
    fn undecodable_file_keeps_file_count_and_is_recorded() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("bad.py"), [0xff, 0xfe, 0x00, 0xff]).unwrap();
        fs::write(tmp.path().join("good.py"), "ok = True\n").unwrap();

        let stats = analyze_code_stats(tmp.path());
        assert_eq!(stats.counts["python_files"], 2);
        assert_eq!(stats.counts["python_lines"], 1);
        assert_eq!(stats.skipped_files, 1);
    }

    #[test]
    fn unmatched_files_produce_no_counters() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("notes.txt"), "hello\n").unwrap();

        let stats = analyze_code_stats(tmp.path());
        assert!(stats.counts.is_empty());
    }
}
