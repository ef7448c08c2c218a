//! Package manifest files

use std::fs;
use std::path::{Path, PathBuf};

use diwire_application::PackageSet;
use diwire_domain::error::{Error, Result};
use diwire_domain::source::SourcePackage;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::constants::INDEX_EXTENSIONS;
use crate::error_ext::ErrorContext;

/// Contents of one manifest file
///
/// ```toml
/// [[packages]]
/// import_path = "app.com/db"
///
/// [[packages.structs]]
/// name = "Pool"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexManifest {
    #[serde(default)]
    pub packages: Vec<SourcePackage>,
}

impl IndexManifest {
    /// Decode a manifest, picking the format from `extension`
    pub fn from_str_with_extension(content: &str, extension: &str) -> Result<Self> {
        decode(content, extension, "manifest")
    }
}

/// Read a single manifest file
pub fn read_manifest(path: &Path) -> Result<IndexManifest> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let content = fs::read_to_string(path)
        .io_context(format!("Failed to read manifest {}", path.display()))?;
    let manifest = decode(&content, &extension, &path.display().to_string())?;
    debug!(
        path = %path.display(),
        packages = manifest.packages.len(),
        "Read manifest"
    );
    Ok(manifest)
}

fn decode(content: &str, extension: &str, origin: &str) -> Result<IndexManifest> {
    match extension {
        "toml" => toml::from_str(content).with_parse_context(|| format!("Invalid TOML in {origin}")),
        "json" => {
            serde_json::from_str(content).with_parse_context(|| format!("Invalid JSON in {origin}"))
        }
        other => Err(Error::invalid_argument(format!(
            "Unsupported manifest extension {other:?} for {origin}, expected one of {}",
            INDEX_EXTENSIONS.join(", ")
        ))),
    }
}

/// Load a source index from a manifest file or a directory of manifests
///
/// Directory entries are read in file-name order; files with other
/// extensions are skipped. An import path declared twice is an error.
pub fn load_index(path: &Path) -> Result<PackageSet> {
    if !path.exists() {
        return Err(Error::not_found(path.display().to_string()));
    }
    let files = if path.is_dir() {
        manifest_files(path)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut index = PackageSet::new();
    for file in &files {
        for package in read_manifest(file)?.packages {
            let import_path = package.import_path.clone();
            if index.insert(package).is_some() {
                return Err(Error::invalid_argument(format!(
                    "Package {import_path:?} declared twice (last in {})",
                    file.display()
                )));
            }
        }
    }

    info!(
        path = %path.display(),
        files = files.len(),
        packages = index.len(),
        "Loaded source index"
    );
    Ok(index)
}

fn manifest_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let entries = fs::read_dir(dir).io_context(format!("Failed to list {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .io_context(format!("Failed to list {}", dir.display()))?
            .path();
        let known = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| INDEX_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        if path.is_file() && known {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
