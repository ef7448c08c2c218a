//! Port Interfaces
//!
//! Boundary contracts the wire pass depends on.
//!
//! - **finder.rs** - Dependency to declaration lookup
//! - **source.rs** - Package metadata supplied by a parser

/// Declaration lookup port
pub mod finder;
/// Source index port
pub mod source;

pub use finder::{FindContext, Finder};
pub use source::SourceIndex;
