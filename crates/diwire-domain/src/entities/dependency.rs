//! Dependencies: what a consumer asks the graph for

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Struct;
use crate::constants::{ERROR_TYPE, POINTER_MARKER};
use crate::error::{Error, Result};
use crate::value_objects::{DependencyId, TypeKind, TypeName};

/// A reference to a type in some package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    /// Import path, empty for builtins
    #[serde(default)]
    pub import: String,
    #[serde(rename = "type")]
    pub type_name: TypeName,
    /// Explicit package name when it differs from the import path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    /// Module directory the type was discovered in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default)]
    pub kind: TypeKind,
}

impl TypeRef {
    pub fn new<I: Into<String>>(import: I, type_name: TypeName) -> Self {
        let import = import.into();
        let kind = if import.is_empty() && type_name.is_builtin() {
            TypeKind::Builtin
        } else {
            TypeKind::Unknown
        };
        Self {
            import,
            type_name,
            package: None,
            module: None,
            kind,
        }
    }

    /// A predeclared type such as `string`
    pub fn builtin<S: Into<String>>(name: S) -> Self {
        Self::new(String::new(), TypeName::new(name))
    }

    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_package<S: Into<String>>(mut self, package: S) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_module<S: Into<String>>(mut self, module: S) -> Self {
        self.module = Some(module.into());
        self
    }

    /// The same reference with a different type name
    pub fn with_type_name(&self, type_name: TypeName) -> Self {
        Self {
            type_name,
            ..self.clone()
        }
    }

    pub fn id(&self) -> DependencyId {
        DependencyId::new(&self.import, &self.type_name)
    }

    pub fn is_builtin(&self) -> bool {
        self.import.is_empty() && self.type_name.is_builtin()
    }

    pub fn is_error(&self) -> bool {
        self.import.is_empty()
            && !self.type_name.is_pointer()
            && self.type_name.base() == ERROR_TYPE
    }

    /// Parse a type specifier
    ///
    /// Accepted forms: `import/path.Type`, `import/path.*Type`,
    /// `"import/path".*Type`, `*import/path.Type` and bare builtins.
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        let rest = trimmed.trim_start_matches(POINTER_MARKER);
        let leading = trimmed.len() - rest.len();

        let (import, type_part) = if let Some(quoted) = rest.strip_prefix('"') {
            let Some(end) = quoted.find('"') else {
                return Err(Error::invalid_specifier(spec, "unterminated import path"));
            };
            let type_part = quoted[end + 1..]
                .strip_prefix('.')
                .ok_or_else(|| Error::invalid_specifier(spec, "expected '.' after import path"))?;
            (&quoted[..end], type_part)
        } else {
            let segment_start = rest.rfind('/').map_or(0, |i| i + 1);
            match rest[segment_start..].rfind('.') {
                Some(dot) => {
                    let dot = segment_start + dot;
                    (&rest[..dot], &rest[dot + 1..])
                }
                None if segment_start == 0 => ("", rest),
                None => return Err(Error::invalid_specifier(spec, "missing type name")),
            }
        };

        if import.is_empty() && rest.starts_with('"') {
            return Err(Error::invalid_specifier(spec, "empty import path"));
        }

        let parsed = TypeName::parse(type_part).map_err(|_| {
            Error::invalid_specifier(spec, format!("{type_part:?} is not a type name"))
        })?;
        let depth = usize::from(parsed.pointer_depth()) + leading;
        let depth = u8::try_from(depth)
            .map_err(|_| Error::invalid_specifier(spec, "too many pointer markers"))?;
        let type_name = parsed.with_depth(depth);

        if import.is_empty() && !type_name.is_builtin() {
            return Err(Error::invalid_specifier(
                spec,
                format!("{} is not a builtin and has no import path", type_name.base()),
            ));
        }
        Ok(Self::new(import, type_name))
    }
}

impl FromStr for TypeRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// A dependency owned by a struct field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    /// ID of the struct owning the field
    pub owner: DependencyId,
    pub name: String,
    pub import: String,
    #[serde(rename = "type")]
    pub type_name: TypeName,
    #[serde(default)]
    pub kind: TypeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
}

impl StructField {
    pub fn new<N: Into<String>>(owner: DependencyId, name: N, type_ref: TypeRef) -> Self {
        Self {
            owner,
            name: name.into(),
            import: type_ref.import,
            type_name: type_ref.type_name,
            kind: type_ref.kind,
            package: type_ref.package,
            module: type_ref.module,
        }
    }

    pub fn id(&self) -> DependencyId {
        DependencyId::new(&self.import, &self.type_name)
    }

    /// The field's type as a standalone reference
    pub fn type_ref(&self) -> TypeRef {
        TypeRef {
            import: self.import.clone(),
            type_name: self.type_name.clone(),
            package: self.package.clone(),
            module: self.module.clone(),
            kind: self.kind,
        }
    }

    pub fn is_exported(&self) -> bool {
        crate::value_objects::is_exported(&self.name)
    }
}

/// Something a consumer needs constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dependency {
    /// A plain type reference
    Type(TypeRef),
    /// A field of a struct being constructed
    Field(StructField),
    /// A struct that is already its own declaration
    Struct(Struct),
    /// The error sentinel of a result list
    Error,
}

impl Dependency {
    /// Parse a type specifier; `error` yields the sentinel
    pub fn parse(spec: &str) -> Result<Self> {
        let type_ref = TypeRef::parse(spec)?;
        if type_ref.is_error() {
            return Ok(Self::Error);
        }
        Ok(Self::Type(type_ref))
    }

    pub fn id(&self) -> DependencyId {
        match self {
            Self::Type(type_ref) => type_ref.id(),
            Self::Field(field) => field.id(),
            Self::Struct(s) => s.id(),
            Self::Error => DependencyId::from_raw(ERROR_TYPE),
        }
    }

    /// The requested type as a standalone reference
    pub fn type_ref(&self) -> TypeRef {
        match self {
            Self::Type(type_ref) => type_ref.clone(),
            Self::Field(field) => field.type_ref(),
            Self::Struct(s) => s.type_ref(),
            Self::Error => TypeRef::builtin(ERROR_TYPE),
        }
    }

    pub fn import_path(&self) -> &str {
        match self {
            Self::Type(type_ref) => &type_ref.import,
            Self::Field(field) => &field.import,
            Self::Struct(s) => &s.import,
            Self::Error => "",
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Type(type_ref) => type_ref.kind,
            Self::Field(field) => field.kind,
            Self::Struct(_) => TypeKind::Struct,
            Self::Error => TypeKind::Builtin,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl From<TypeRef> for Dependency {
    fn from(type_ref: TypeRef) -> Self {
        if type_ref.is_error() {
            Self::Error
        } else {
            Self::Type(type_ref)
        }
    }
}

impl From<StructField> for Dependency {
    fn from(field: StructField) -> Self {
        Self::Field(field)
    }
}

impl From<Struct> for Dependency {
    fn from(s: Struct) -> Self {
        Self::Struct(s)
    }
}

impl FromStr for Dependency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

