//! Fixed text-matching rules used by the extractors
//!
//! These are heuristic, line-based searches, not parsers: they miss constructs
//! written in other forms and can false-positive on text that merely resembles
//! a pattern (a string literal containing `def foo(`, for instance). That
//! trade-off is deliberate; nothing downstream treats the results as exact.

use regex::Regex;
use std::sync::LazyLock;

/// Language identifier -> file-name pattern (extension based, case insensitive)
pub static LANGUAGE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("python", r"\.py$"),
        ("javascript", r"\.js$"),
        ("typescript", r"\.ts$"),
        ("java", r"\.java$"),
        ("cpp", r"\.(cpp|hpp)$"),
        ("rust", r"\.rs$"),
        ("html", r"\.html$"),
        ("css", r"\.css$"),
    ]
    .into_iter()
    .map(|(lang, pattern)| {
        let re = Regex::new(&format!("(?i){pattern}")).expect("language pattern must compile");
        (lang, re)
    })
    .collect()
});

/// Source-file suffixes scanned by the documentation-hints pass
pub const HINT_SOURCE_SUFFIXES: &[&str] = &[".py", ".js", ".ts", ".java"];

/// `# TODO: ...` comment markers, one capture per line
pub static TODO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)#\s*TODO:?\s*(.+)$").expect("todo pattern must compile"));

/// Decorator-style route declarations, e.g. `@app.route("/users")`
///
/// Only consulted when the file text looks router-related (see hints pass).
pub static ROUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@\w+\.route\(['"]([^'"]+)['"]\)"#).expect("route pattern must compile")
});

/// `def name(` function definitions
pub static FUNCTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"def\s+(\w+)\s*\(").expect("function pattern must compile"));

/// `class Name:` / `class Name(` class definitions
pub static CLASS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"class\s+(\w+)\s*[:\(]").expect("class pattern must compile"));
