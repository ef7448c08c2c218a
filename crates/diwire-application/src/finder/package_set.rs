//! In-memory source index

use std::collections::BTreeMap;
use std::sync::Arc;

use diwire_domain::error::Result;
use diwire_domain::source::SourcePackage;

use crate::ports::SourceIndex;

/// Packages keyed by import path
#[derive(Debug, Clone, Default)]
pub struct PackageSet {
    packages: BTreeMap<String, Arc<SourcePackage>>,
}

impl PackageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package, replacing any earlier one with the same import path
    pub fn insert(&mut self, package: SourcePackage) -> Option<Arc<SourcePackage>> {
        self.packages
            .insert(package.import_path.clone(), Arc::new(package))
    }

    pub fn with_package(mut self, package: SourcePackage) -> Self {
        self.insert(package);
        self
    }

    pub fn get(&self, import_path: &str) -> Option<&Arc<SourcePackage>> {
        self.packages.get(import_path)
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn import_paths(&self) -> impl Iterator<Item = &str> {
        self.packages.keys().map(String::as_str)
    }
}

impl FromIterator<SourcePackage> for PackageSet {
    fn from_iter<T: IntoIterator<Item = SourcePackage>>(iter: T) -> Self {
        let mut set = Self::new();
        for package in iter {
            set.insert(package);
        }
        set
    }
}

impl SourceIndex for PackageSet {
    fn package(&self, import_path: &str) -> Result<Option<Arc<SourcePackage>>> {
        Ok(self.packages.get(import_path).cloned())
    }
}
