//! Value objects
//!
//! Immutable descriptors shared by the finder, resolver and emitter.

mod id;
mod import;
mod type_name;
mod variable;

pub use id::DependencyId;
pub use import::Import;
pub use type_name::{TypeKind, TypeName, is_exported, is_identifier};
pub use variable::Variable;
