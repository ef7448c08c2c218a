//! Import allocation

use std::collections::BTreeMap;

use diwire_domain::{Import, is_identifier};

use super::scope::{Scope, is_reserved};

/// Import paths used by the generated code, with their local names
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    target: String,
    names: BTreeMap<String, String>,
}

impl ImportSet {
    /// Imports for code generated into the package at `target`
    pub fn new<S: Into<String>>(target: S) -> Self {
        Self {
            target: target.into(),
            names: BTreeMap::new(),
        }
    }

    /// Local name for `path`, importing it on first use
    ///
    /// Returns `None` for builtins (empty path) and for the target package,
    /// whose names are referenced unqualified.
    pub fn add(&mut self, scope: &mut Scope, path: &str, package: Option<&str>) -> Option<String> {
        if path.is_empty() || path == self.target {
            return None;
        }
        if let Some(name) = self.names.get(path) {
            return Some(name.clone());
        }
        let preferred = package
            .filter(|name| is_identifier(name))
            .map_or_else(|| conventional_name(path), str::to_string);
        let name = scope.declare_import(&preferred);
        self.names.insert(path.to_string(), name.clone());
        Some(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Imports sorted by path, then name
    pub fn to_vec(&self) -> Vec<Import> {
        let mut imports: Vec<Import> = self
            .names
            .iter()
            .map(|(path, name)| Import::new(path.clone(), name.clone()))
            .collect();
        imports.sort();
        imports
    }
}

/// Package name implied by an import path
///
/// Uses the last path segment, skipping major-version segments such as
/// `v2` (or a `.v3` suffix), dropping a `go-` prefix and any character that
/// cannot appear in an identifier.
pub fn conventional_name(path: &str) -> String {
    let segment = path
        .rsplit('/')
        .find(|segment| !is_version_segment(segment))
        .unwrap_or(path);
    let segment = match segment.rsplit_once('.') {
        Some((head, tail)) if is_version_segment(tail) => head,
        _ => segment,
    };
    let segment = segment.strip_prefix("go-").unwrap_or(segment);
    let mut name: String = segment
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_lowercase();
    if name.chars().next().is_none_or(|c| c.is_ascii_digit()) {
        name.insert(0, 'p');
    }
    if is_reserved(&name) {
        name.push_str("pkg");
    }
    name
}

fn is_version_segment(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}
