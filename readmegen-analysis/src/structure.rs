//! Directory structure extractor

use crate::walker::walk_tree;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Map every directory in the tree to its visible file names.
///
/// Keys are paths relative to the tree root (`root` for the top level);
/// hidden files are excluded from each listing. Hidden directories are still
/// visited and get their own entries.
pub fn analyze_directory_structure<P: AsRef<Path>>(repo_path: P) -> BTreeMap<String, Vec<String>> {
    let root = repo_path.as_ref();
    let mut structure = BTreeMap::new();

    for (dir, files) in walk_tree(root) {
        let key = match dir.strip_prefix(root) {
            Ok(rel) if !rel.as_os_str().is_empty() => {
                rel.to_string_lossy().replace('\\', "/")
            }
            _ => "root".to_string(),
        };

        let visible: Vec<String> = files
            .into_iter()
            .filter(|name| !name.starts_with('.'))
            .collect();

        structure.insert(key, visible);
    }

    debug!(directories = structure.len(), "Directory structure collected");
    structure
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn top_level_is_keyed_root() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("main.py"), "").unwrap();

        let structure = analyze_directory_structure(tmp.path());
        assert_eq!(structure["root"], vec!["main.py"]);
    }

    #[test]
    fn nested_directories_use_relative_keys() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("src/utils")).unwrap();
        fs::write(tmp.path().join("src/utils/helpers.py"), "").unwrap();

        let structure = analyze_directory_structure(tmp.path());
        assert_eq!(structure["src/utils"], vec!["helpers.py"]);
        assert!(structure.contains_key("src"));
    }

    #[test]
    fn hidden_files_are_never_listed() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join(".env"), "SECRET=1\n").unwrap();
        fs::write(tmp.path().join("app.py"), "").unwrap();
        fs::create_dir(tmp.path().join("config")).unwrap();
        fs::write(tmp.path().join("config/.hidden"), "").unwrap();

        let structure = analyze_directory_structure(tmp.path());
        assert_eq!(structure["root"], vec!["app.py"]);
        assert_eq!(structure["config"], Vec::<String>::new());
    }
}
