//! Domain Layer - diwire
//!
//! Core types of the dependency-injection wire pass: what is requested
//! ([`Dependency`]), how it gets built ([`Declaration`]), the provider
//! signature being generated ([`Function`]) and the source facts the
//! finder consults ([`source`]).
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | Dependency, Declaration and Function model |
//! | [`value_objects`] | Type names, dependency IDs, imports, variables |
//! | [`source`] | Package metadata consumed from the parser collaborator |
//! | [`error`] | Error taxonomy and `Result` alias |
//! | [`constants`] | Builtins, keywords and naming constants |
//!
//! This crate has no infrastructure dependencies.

pub mod constants;
pub mod entities;
pub mod error;
pub mod source;
pub mod value_objects;

pub use constants::*;
pub use entities::*;
pub use error::{Chain, Error, Result};
pub use value_objects::*;
