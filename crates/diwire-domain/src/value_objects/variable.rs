//! Named values in generated source

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DependencyId, TypeKind, TypeName};

/// A variable produced by a construction statement or bound to a parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    /// Import path of the variable's type
    pub import: String,
    /// Local identifier
    pub name: String,
    pub type_name: TypeName,
    pub kind: TypeKind,
}

impl Variable {
    pub fn new<I: Into<String>, N: Into<String>>(
        import: I,
        name: N,
        type_name: TypeName,
        kind: TypeKind,
    ) -> Self {
        Self {
            import: import.into(),
            name: name.into(),
            type_name,
            kind,
        }
    }

    pub fn id(&self) -> DependencyId {
        DependencyId::new(&self.import, &self.type_name)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.id())
    }
}
