//! The target function a wire pass generates

use std::collections::BTreeMap;

use super::{Dependency, External};
use crate::value_objects::DependencyId;

/// Substitutions applied before lookup: requested ID to replacement
///
/// Ordered so that iteration, and everything derived from it, is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aliases(BTreeMap<DependencyId, Dependency>);

impl Aliases {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map requests for `from` onto `to`; replaces an earlier mapping
    pub fn insert(&mut self, from: DependencyId, to: Dependency) -> Option<Dependency> {
        self.0.insert(from, to)
    }

    pub fn get(&self, id: &DependencyId) -> Option<&Dependency> {
        self.0.get(id)
    }

    pub fn contains(&self, id: &DependencyId) -> bool {
        self.0.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DependencyId, &Dependency)> {
        self.0.iter()
    }
}

impl FromIterator<(DependencyId, Dependency)> for Aliases {
    fn from_iter<T: IntoIterator<Item = (DependencyId, Dependency)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Signature of the provider function to generate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    /// Package the generated code lives in; never imported
    pub target_import: String,
    pub params: Vec<External>,
    pub results: Vec<Dependency>,
    pub aliases: Aliases,
    /// Emit externally-derived values first
    pub hoist: bool,
}

impl Function {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, target_import: T) -> Self {
        Self {
            name: name.into(),
            target_import: target_import.into(),
            params: Vec::new(),
            results: Vec::new(),
            aliases: Aliases::new(),
            hoist: false,
        }
    }

    pub fn with_param(mut self, param: impl Into<External>) -> Self {
        self.params.push(param.into());
        self
    }

    pub fn with_result(mut self, result: impl Into<Dependency>) -> Self {
        self.results.push(result.into());
        self
    }

    pub fn with_alias(mut self, from: &Dependency, to: impl Into<Dependency>) -> Self {
        self.aliases.insert(from.id(), to.into());
        self
    }

    pub fn with_hoist(mut self, hoist: bool) -> Self {
        self.hoist = hoist;
        self
    }

    pub fn has_error_result(&self) -> bool {
        self.results.iter().any(Dependency::is_error)
    }
}
