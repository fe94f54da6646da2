//! Dependency manifest extractor
//!
//! Checks a fixed set of well-known manifest names at the tree root only.
//! Absent manifests are skipped; malformed ones are skipped with a warning
//! and their ecosystem omitted, exactly as if the manifest were absent.

use readmegen_core::EcosystemDependencies;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

/// Extract declared dependencies from recognized root-level manifests.
pub fn extract_dependencies<P: AsRef<Path>>(
    repo_path: P,
) -> BTreeMap<String, EcosystemDependencies> {
    let root = repo_path.as_ref();
    let mut dependencies = BTreeMap::new();

    if let Some(nodejs) = read_package_json(root) {
        dependencies.insert("nodejs".to_string(), nodejs);
    }
    if let Some(python) = read_requirements_txt(root) {
        dependencies.insert("python".to_string(), python);
    }
    if let Some(rust) = read_cargo_toml(root) {
        dependencies.insert("rust".to_string(), rust);
    }

    debug!(ecosystems = dependencies.len(), "Dependency manifests scanned");
    dependencies
}

fn read_package_json(root: &Path) -> Option<EcosystemDependencies> {
    let path = root.join("package.json");
    if !path.exists() {
        return None;
    }

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Failed to read package.json, skipping nodejs dependencies");
            return None;
        }
    };

    match serde_json::from_str::<PackageManifest>(&text) {
        Ok(manifest) => Some(EcosystemDependencies::Groups {
            dependencies: manifest.dependencies,
            dev_dependencies: manifest.dev_dependencies,
        }),
        Err(e) => {
            warn!(error = %e, "Malformed package.json, skipping nodejs dependencies");
            None
        }
    }
}

fn read_requirements_txt(root: &Path) -> Option<EcosystemDependencies> {
    let path = root.join("requirements.txt");
    if !path.exists() {
        return None;
    }

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Failed to read requirements.txt, skipping python dependencies");
            return None;
        }
    };

    let requirements: Vec<String> = text
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.trim().to_string())
        .collect();

    Some(EcosystemDependencies::Requirements(requirements))
}

fn read_cargo_toml(root: &Path) -> Option<EcosystemDependencies> {
    let path = root.join("Cargo.toml");
    if !path.exists() {
        return None;
    }

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Failed to read Cargo.toml, skipping rust dependencies");
            return None;
        }
    };

    let manifest: toml::Value = match text.parse() {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Malformed Cargo.toml, skipping rust dependencies");
            return None;
        }
    };

    let table = manifest.get("dependencies").and_then(|v| v.as_table())?;
    let packages = table
        .iter()
        .map(|(name, spec)| (name.clone(), dependency_version(spec)))
        .collect();

    Some(EcosystemDependencies::Packages(packages))
}

/// Render a dependency spec as a version constraint string.
///
/// Plain strings are taken as-is; tables use their `version` key when present
/// and `*` otherwise (path, git, and workspace dependencies carry no version).
fn dependency_version(spec: &toml::Value) -> String {
    match spec {
        toml::Value::String(version) => version.clone(),
        toml::Value::Table(table) => table
            .get("version")
            .and_then(|v| v.as_str())
            .unwrap_or("*")
            .to_string(),
        _ => "*".to_string(),
    }
}
