//! Domain layer constants
//!
//! Names and markers that are part of the wiring rules themselves. Loader and
//! logging defaults remain in `diwire_infrastructure::constants`.

// ============================================================================
// TYPE DESCRIPTOR CONSTANTS
// ============================================================================

/// Marker rendered in front of a type name for each level of indirection
pub const POINTER_MARKER: char = '*';

/// Name of the error sentinel type
pub const ERROR_TYPE: &str = "error";

/// Predeclared types of the generated language
///
/// Fields of these types are never auto-wired unless an external or alias
/// supplies them.
pub const BUILTIN_TYPES: &[&str] = &[
    "any",
    "bool",
    "byte",
    "complex64",
    "complex128",
    "error",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "string",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

/// Builtin types whose zero value is the literal `0`
pub const NUMERIC_TYPES: &[&str] = &[
    "byte",
    "complex64",
    "complex128",
    "float32",
    "float64",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "rune",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

// ============================================================================
// IDENTIFIER CONSTANTS
// ============================================================================

/// Keywords of the generated language; never usable as identifiers
pub const KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Predeclared identifiers that generated variables must not shadow
pub const PREDECLARED: &[&str] = &[
    "any",
    "append",
    "bool",
    "byte",
    "cap",
    "clear",
    "close",
    "comparable",
    "complex",
    "complex64",
    "complex128",
    "copy",
    "delete",
    "error",
    "false",
    "float32",
    "float64",
    "imag",
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "iota",
    "len",
    "make",
    "max",
    "min",
    "new",
    "nil",
    "panic",
    "print",
    "println",
    "real",
    "recover",
    "rune",
    "string",
    "true",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
];

/// Variable name bound to a provider's error result
pub const ERROR_VARIABLE: &str = "err";

/// Suffix appended to a variable name that clashes with a keyword,
/// predeclared identifier or import name
pub const RESERVED_SUFFIX: &str = "Var";
