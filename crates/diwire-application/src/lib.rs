//! Application Layer - diwire
//!
//! Implements the wire pass: given a target [`Function`](diwire_domain::Function)
//! it resolves every requested type to a construction strategy, builds a
//! memoized dependency graph, rejects cycles and emits the ordered
//! statements that construct the results.
//!
//! ## Architecture
//!
//! - `ports::*`: boundary contracts ([`Finder`], [`SourceIndex`])
//! - `finder::*`: lookup strategies over a source index, alias substitution
//! - `resolver::*`: graph building and the [`Injector`] use case
//! - `emitter::*`: identifier and import allocation, coercion, statements
//! - `provider`: the generated [`Provider`] and its rendering
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `diwire-domain`: dependency model, value objects and errors
//! - `tracing`: resolution diagnostics

pub mod emitter;
pub mod finder;
pub mod ports;
pub mod provider;
pub mod resolver;

pub use finder::{AliasFinder, IndexFinder, PackageSet, SharedIndexFinder};
pub use ports::*;
pub use provider::{Param, Provider, ResultSlot};
pub use resolver::{Graph, Injector};
