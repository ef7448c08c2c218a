//! Type descriptors
//!
//! A [`TypeName`] is the structured form of a rendered type such as `*Pool`:
//! the bare base name plus the number of pointer markers in front of it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{BUILTIN_TYPES, POINTER_MARKER};
use crate::error::{Error, Result};

/// What a type name refers to in its package
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Struct,
    Interface,
    Alias,
    Builtin,
    #[default]
    Unknown,
}

impl TypeKind {
    pub fn is_interface(self) -> bool {
        matches!(self, Self::Interface)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Alias => "alias",
            Self::Builtin => "builtin",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Base type name with pointer depth
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName {
    base: String,
    pointer_depth: u8,
}

impl TypeName {
    /// A value type named `base`
    pub fn new<S: Into<String>>(base: S) -> Self {
        Self {
            base: base.into(),
            pointer_depth: 0,
        }
    }

    /// A single pointer to `base`
    pub fn pointer<S: Into<String>>(base: S) -> Self {
        Self {
            base: base.into(),
            pointer_depth: 1,
        }
    }

    /// Parse a rendered type such as `Pool` or `*Pool`
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let base = trimmed.trim_start_matches(POINTER_MARKER);
        let depth = trimmed.len() - base.len();
        if base.is_empty() {
            return Err(Error::invalid_specifier(input, "missing type name"));
        }
        if !is_identifier(base) {
            return Err(Error::invalid_specifier(
                input,
                format!("{base:?} is not an identifier"),
            ));
        }
        let pointer_depth = u8::try_from(depth)
            .map_err(|_| Error::invalid_specifier(input, "too many pointer markers"))?;
        Ok(Self {
            base: base.to_string(),
            pointer_depth,
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn pointer_depth(&self) -> u8 {
        self.pointer_depth
    }

    pub fn is_pointer(&self) -> bool {
        self.pointer_depth > 0
    }

    /// The same base with `depth` pointer markers
    pub fn with_depth(&self, depth: u8) -> Self {
        Self {
            base: self.base.clone(),
            pointer_depth: depth,
        }
    }

    /// The type with one pointer marker removed
    pub fn elem(&self) -> Self {
        self.with_depth(self.pointer_depth.saturating_sub(1))
    }

    pub fn is_builtin(&self) -> bool {
        BUILTIN_TYPES.contains(&self.base.as_str())
    }

    pub fn is_exported(&self) -> bool {
        is_exported(&self.base)
    }

    /// Same base name regardless of pointer depth
    pub fn same_base(&self, other: &TypeName) -> bool {
        self.base == other.base
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.pointer_depth {
            write!(f, "{POINTER_MARKER}")?;
        }
        f.write_str(&self.base)
    }
}

impl FromStr for TypeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypeName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.to_string()
    }
}

/// Exported names start with an uppercase letter
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Letters, digits and underscores, not starting with a digit
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
