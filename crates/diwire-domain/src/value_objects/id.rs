//! Normalized dependency identifiers

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::TypeName;
use crate::constants::POINTER_MARKER;

/// Key identifying a dependency across the graph
///
/// Rendered as `"import/path".*Base`. Only a single pointer marker is kept,
/// so `*T` and `T` are distinct while `**T` shares the `*T` identity.
/// Types without an import path (builtins) render as the bare base.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyId(String);

impl DependencyId {
    pub fn new(import: &str, type_name: &TypeName) -> Self {
        let marker = if type_name.is_pointer() {
            POINTER_MARKER.to_string()
        } else {
            String::new()
        };
        if import.is_empty() {
            Self(format!("{marker}{}", type_name.base()))
        } else {
            Self(format!("\"{import}\".{marker}{}", type_name.base()))
        }
    }

    /// Wrap an already normalized key
    pub fn from_raw<S: Into<String>>(raw: S) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DependencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DependencyId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DependencyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
