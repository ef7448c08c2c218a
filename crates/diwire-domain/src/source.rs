//! Source metadata
//!
//! The package facts a parser collaborator hands to the finder: which
//! structs, interfaces, functions and type aliases a package declares.
//! These are plain serde value objects so an index can be loaded from a
//! manifest file.

use serde::{Deserialize, Serialize};

use crate::entities::TypeRef;
use crate::error::{Error, Result};
use crate::value_objects::{TypeKind, TypeName};

/// A type as written in a declaration
///
/// An empty `import` means the declaring package (or a builtin). In a
/// manifest the type can be a specifier string (`"*Pool"`,
/// `"app.com/db.*Pool"`) or a table with explicit fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SourceTypeRepr")]
pub struct SourceType {
    pub import: String,
    #[serde(rename = "type")]
    pub name: TypeName,
    pub kind: TypeKind,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SourceTypeRepr {
    Spec(String),
    Table {
        #[serde(default)]
        import: String,
        #[serde(rename = "type")]
        name: TypeName,
        #[serde(default)]
        kind: TypeKind,
    },
}

impl TryFrom<SourceTypeRepr> for SourceType {
    type Error = Error;

    fn try_from(repr: SourceTypeRepr) -> Result<Self> {
        match repr {
            SourceTypeRepr::Spec(spec) => Self::parse(&spec),
            SourceTypeRepr::Table { import, name, kind } => Ok(Self { import, name, kind }),
        }
    }
}

impl SourceType {
    pub fn new<I: Into<String>>(import: I, name: TypeName) -> Self {
        Self {
            import: import.into(),
            name,
            kind: TypeKind::Unknown,
        }
    }

    /// A type declared in the same package
    pub fn local(name: TypeName) -> Self {
        Self::new(String::new(), name)
    }

    pub fn with_kind(mut self, kind: TypeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Parse `*Pool` (package local) or a qualified specifier
    pub fn parse(spec: &str) -> Result<Self> {
        let trimmed = spec.trim();
        if trimmed.contains(['.', '"', '/']) {
            let type_ref = TypeRef::parse(trimmed)?;
            return Ok(Self {
                import: type_ref.import,
                name: type_ref.type_name,
                kind: type_ref.kind,
            });
        }
        let name = TypeName::parse(trimmed)?;
        let kind = if name.is_builtin() {
            TypeKind::Builtin
        } else {
            TypeKind::Unknown
        };
        Ok(Self {
            import: String::new(),
            name,
            kind,
        })
    }

    pub fn is_builtin(&self) -> bool {
        self.import.is_empty() && self.name.is_builtin()
    }

    /// Resolve against the declaring package's import path
    pub fn to_type_ref(&self, home_import: &str) -> TypeRef {
        let import = if self.import.is_empty() && !self.name.is_builtin() {
            home_import.to_string()
        } else {
            self.import.clone()
        };
        let kind = if self.is_builtin() {
            TypeKind::Builtin
        } else {
            self.kind
        };
        TypeRef::new(import, self.name.clone()).with_kind(kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: SourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceStruct {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<SourceField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInterface {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<String>,
}

/// A package-level function; only parameter types matter for wiring
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFunction {
    pub name: String,
    #[serde(default)]
    pub params: Vec<SourceType>,
    #[serde(default)]
    pub results: Vec<SourceType>,
}

/// `type Name = Target`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceAlias {
    pub name: String,
    pub target: SourceType,
}

/// Everything the finder knows about one import path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourcePackage {
    pub import_path: String,
    /// Declared package name when it differs from the last path segment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Module directory the package belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default)]
    pub structs: Vec<SourceStruct>,
    #[serde(default)]
    pub interfaces: Vec<SourceInterface>,
    #[serde(default)]
    pub functions: Vec<SourceFunction>,
    #[serde(default)]
    pub aliases: Vec<SourceAlias>,
}

impl SourcePackage {
    pub fn new<S: Into<String>>(import_path: S) -> Self {
        Self {
            import_path: import_path.into(),
            ..Self::default()
        }
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_struct(mut self, s: SourceStruct) -> Self {
        self.structs.push(s);
        self
    }

    pub fn with_interface(mut self, interface: SourceInterface) -> Self {
        self.interfaces.push(interface);
        self
    }

    pub fn with_function(mut self, function: SourceFunction) -> Self {
        self.functions.push(function);
        self
    }

    pub fn with_alias(mut self, alias: SourceAlias) -> Self {
        self.aliases.push(alias);
        self
    }

    pub fn find_struct(&self, name: &str) -> Option<&SourceStruct> {
        self.structs.iter().find(|s| s.name == name)
    }

    pub fn find_interface(&self, name: &str) -> Option<&SourceInterface> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    pub fn find_alias(&self, name: &str) -> Option<&SourceAlias> {
        self.aliases.iter().find(|a| a.name == name)
    }

    /// Kind of a type declared in this package
    pub fn kind_of(&self, name: &str) -> Option<TypeKind> {
        if self.find_struct(name).is_some() {
            Some(TypeKind::Struct)
        } else if self.find_interface(name).is_some() {
            Some(TypeKind::Interface)
        } else if self.find_alias(name).is_some() {
            Some(TypeKind::Alias)
        } else {
            None
        }
    }
}

impl SourceStruct {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field<S: Into<String>>(mut self, name: S, ty: SourceType) -> Self {
        self.fields.push(SourceField {
            name: name.into(),
            ty,
            tag: None,
        });
        self
    }
}

impl SourceInterface {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }
}

impl SourceFunction {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            results: Vec::new(),
        }
    }

    pub fn with_param(mut self, ty: SourceType) -> Self {
        self.params.push(ty);
        self
    }

    pub fn with_result(mut self, ty: SourceType) -> Self {
        self.results.push(ty);
        self
    }
}

impl SourceAlias {
    pub fn new<S: Into<String>>(name: S, target: SourceType) -> Self {
        Self {
            name: name.into(),
            target,
        }
    }
}
