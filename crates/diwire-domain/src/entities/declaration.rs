//! Declarations: how a dependency gets constructed

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Dependency, StructField, TypeRef};
use crate::constants::ERROR_TYPE;
use crate::value_objects::{DependencyId, TypeKind, TypeName};

/// A struct built with a composite literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Struct {
    pub import: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Requested type; a pointer marker makes the literal addressed
    #[serde(rename = "type")]
    pub type_name: TypeName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default)]
    pub fields: Vec<StructField>,
}

impl Struct {
    pub fn new<I: Into<String>>(import: I, type_name: TypeName) -> Self {
        Self {
            import: import.into(),
            package: None,
            type_name,
            module: None,
            fields: Vec::new(),
        }
    }

    pub fn with_package<S: Into<String>>(mut self, package: S) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_module<S: Into<String>>(mut self, module: S) -> Self {
        self.module = Some(module.into());
        self
    }

    /// Append a field of type `type_ref`
    pub fn with_field<N: Into<String>>(mut self, name: N, type_ref: TypeRef) -> Self {
        let field = StructField::new(self.id(), name, type_ref);
        self.fields.push(field);
        self
    }

    pub fn id(&self) -> DependencyId {
        DependencyId::new(&self.import, &self.type_name)
    }

    pub fn type_ref(&self) -> TypeRef {
        let mut type_ref =
            TypeRef::new(self.import.clone(), self.type_name.clone()).with_kind(TypeKind::Struct);
        type_ref.package.clone_from(&self.package);
        type_ref.module.clone_from(&self.module);
        type_ref
    }

    /// One dependency per field, in field order
    pub fn dependencies(&self) -> Vec<Dependency> {
        self.fields.iter().cloned().map(Dependency::Field).collect()
    }
}

/// An exported function whose results include the requested type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionProvider {
    pub import: String,
    pub package: Option<String>,
    pub name: String,
    pub params: Vec<Dependency>,
    /// Declared results; a trailing `error` is the error sentinel
    pub results: Vec<TypeRef>,
    /// Index into `results` of the result this declaration provides
    pub provides: usize,
}

impl FunctionProvider {
    /// The result this declaration was selected for
    pub fn provided(&self) -> Option<&TypeRef> {
        self.results.get(self.provides)
    }

    pub fn returns_error(&self) -> bool {
        self.results.iter().any(TypeRef::is_error)
    }

    /// Non-error results in declaration order
    pub fn value_results(&self) -> impl Iterator<Item = &TypeRef> {
        self.results.iter().filter(|r| !r.is_error())
    }

    /// Position of `provides` among the non-error results
    pub fn provided_slot(&self) -> usize {
        self.results
            .iter()
            .take(self.provides)
            .filter(|r| !r.is_error())
            .count()
    }

    pub fn id(&self) -> DependencyId {
        self.provided().map_or_else(
            || DependencyId::from_raw(format!("\"{}\".{}()", self.import, self.name)),
            TypeRef::id,
        )
    }
}

impl fmt::Display for FunctionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\".{}", self.import, self.name)
    }
}

/// A value supplied by a parameter of the target function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct External {
    #[serde(flatten)]
    pub type_ref: TypeRef,
    /// Parameter name; derived from the type when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl External {
    pub fn new(type_ref: TypeRef) -> Self {
        Self {
            type_ref,
            name: None,
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn id(&self) -> DependencyId {
        self.type_ref.id()
    }
}

impl From<TypeRef> for External {
    fn from(type_ref: TypeRef) -> Self {
        Self::new(type_ref)
    }
}

/// A resolved construction strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Struct(Struct),
    Function(FunctionProvider),
    External(External),
    /// Error sentinel; never constructed
    Error,
}

impl Declaration {
    pub fn id(&self) -> DependencyId {
        match self {
            Self::Struct(s) => s.id(),
            Self::Function(function) => function.id(),
            Self::External(external) => external.id(),
            Self::Error => DependencyId::from_raw(ERROR_TYPE),
        }
    }

    pub fn import_path(&self) -> &str {
        match self {
            Self::Struct(s) => &s.import,
            Self::Function(function) => &function.import,
            Self::External(external) => &external.type_ref.import,
            Self::Error => "",
        }
    }

    /// Dependencies that must be constructed before this declaration
    pub fn dependencies(&self) -> Vec<Dependency> {
        match self {
            Self::Struct(s) => s.dependencies(),
            Self::Function(function) => function.params.clone(),
            Self::External(_) | Self::Error => Vec::new(),
        }
    }

    /// IDs made available by constructing this declaration, paired with
    /// the output slot that carries each
    pub fn provided_ids(&self) -> Vec<(DependencyId, usize)> {
        match self {
            Self::Struct(s) => vec![(s.id(), 0)],
            Self::Function(function) => function
                .value_results()
                .enumerate()
                .map(|(slot, result)| (result.id(), slot))
                .collect(),
            Self::External(external) => vec![(external.id(), 0)],
            Self::Error => Vec::new(),
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct(s) => write!(f, "struct {}", s.id()),
            Self::Function(function) => write!(f, "func {function} -> {}", function.id()),
            Self::External(external) => write!(f, "external {}", external.id()),
            Self::Error => f.write_str(ERROR_TYPE),
        }
    }
}
