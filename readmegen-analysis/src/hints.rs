//! Documentation hints extractor
//!
//! Pools TODO markers, route declarations, and function/class definitions
//! across every source file, deduplicated and sorted per category. Purely
//! textual: a string literal that looks like a definition will be picked up,
//! and definitions in other syntaxes will not.

use crate::patterns::{
    CLASS_PATTERN, FUNCTION_PATTERN, HINT_SOURCE_SUFFIXES, ROUTE_PATTERN, TODO_PATTERN,
};
use crate::walker::walk_tree;
use readmegen_core::DocumentationHints;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

/// Scan source files for documentation-worthy markers.
pub fn extract_documentation_hints<P: AsRef<Path>>(repo_path: P) -> DocumentationHints {
    let mut todos = BTreeSet::new();
    let mut api_endpoints = BTreeSet::new();
    let mut functions = BTreeSet::new();
    let mut classes = BTreeSet::new();
    let mut skipped_files = 0u64;

    for (dir, files) in walk_tree(repo_path.as_ref()) {
        for file in files {
            if !HINT_SOURCE_SUFFIXES
                .iter()
                .any(|suffix| file.ends_with(suffix))
            {
                continue;
            }

            let content = match std::fs::read_to_string(dir.join(&file)) {
                Ok(content) => content,
                Err(_) => {
                    skipped_files += 1;
                    continue;
                }
            };

            for cap in TODO_PATTERN.captures_iter(&content) {
                todos.insert(cap[1].to_string());
            }

            // Route extraction only activates for router-flavored files to
            // cut down on false positives from decorator lookalikes.
            let lower = content.to_lowercase();
            if lower.contains("router") || lower.contains("app.") {
                for cap in ROUTE_PATTERN.captures_iter(&content) {
                    api_endpoints.insert(cap[1].to_string());
                }
            }

            for cap in FUNCTION_PATTERN.captures_iter(&content) {
                functions.insert(cap[1].to_string());
            }
            for cap in CLASS_PATTERN.captures_iter(&content) {
                classes.insert(cap[1].to_string());
            }
        }
    }

    if skipped_files > 0 {
        warn!(skipped = skipped_files, "Some source files could not be read for hints");
    }
    debug!(
        todos = todos.len(),
        api_endpoints = api_endpoints.len(),
        functions = functions.len(),
        classes = classes.len(),
        "Documentation hints collected"
    );

    DocumentationHints {
        todos: todos.into_iter().collect(),
        api_endpoints: api_endpoints.into_iter().collect(),
        functions: functions.into_iter().collect(),
        classes: classes.into_iter().collect(),
        skipped_files,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn app_py_scenario_yields_expected_hints() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("app.py"),
            "# TODO: fix this\ndef handler():\n    pass\n\nclass Handler:\n    pass\n",
        )
        .unwrap();

        let hints = extract_documentation_hints(tmp.path());
        assert_eq!(hints.todos, vec!["fix this"]);
        assert_eq!(hints.functions, vec!["handler"]);
        assert_eq!(hints.classes, vec!["Handler"]);
        assert!(hints.api_endpoints.is_empty());
    }

    #[test]
    fn hints_are_deduplicated_and_sorted_across_files() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("a.py"), "def zeta():\n    pass\ndef alpha():\n    pass\n").unwrap();
        fs::write(tmp.path().join("b.py"), "def alpha():\n    pass\n# TODO: cleanup\n").unwrap();
        fs::write(tmp.path().join("c.py"), "# TODO: cleanup\n").unwrap();

        let hints = extract_documentation_hints(tmp.path());
        assert_eq!(hints.functions, vec!["alpha", "zeta"]);
        assert_eq!(hints.todos, vec!["cleanup"]);
    }

    #[test]
    fn routes_require_router_context() {
        let tmp = tempfile::tempdir().unwrap();
        // No "router" or "app." substring: the route search never activates,
        // even though the decorator itself would match.
        fs::write(tmp.path().join("plain.py"), "@bp.route('/ghost')\ndummy = 1\n").unwrap();
        fs::write(
            tmp.path().join("server.py"),
            "from flask import Flask\napp = Flask(__name__)\n\n@app.route('/users')\ndef users():\n    pass\n",
        )
        .unwrap();

        let hints = extract_documentation_hints(tmp.path());
        assert_eq!(hints.api_endpoints, vec!["/users"]);
    }

    #[test]
    fn non_source_files_are_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("notes.md"), "# TODO: not code\n").unwrap();

        let hints = extract_documentation_hints(tmp.path());
        assert!(hints.todos.is_empty());
    }

    #[test]
    fn unreadable_source_files_are_counted() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("bad.py"), [0xff, 0xfe, 0x00]).unwrap();

        let hints = extract_documentation_hints(tmp.path());
        assert_eq!(hints.skipped_files, 1);
    }
}
