//! Import entries of generated source

use std::fmt;

use serde::{Deserialize, Serialize};

/// An import path bound to a local name
///
/// Ordering is by path first, then name, which is the order imports are
/// rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Import {
    pub path: String,
    pub name: String,
}

impl Import {
    pub fn new<P: Into<String>, N: Into<String>>(path: P, name: N) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \"{}\"", self.name, self.path)
    }
}
