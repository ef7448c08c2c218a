//! Finder implementations
//!
//! | Type | Description |
//! |------|-------------|
//! | [`IndexFinder`] | Function, struct and source-alias strategies over a [`SourceIndex`](crate::ports::SourceIndex) |
//! | [`AliasFinder`] | Applies the target function's alias map before delegating |
//! | [`PackageSet`] | In-memory source index |

mod alias;
mod index_finder;
mod package_set;

pub use alias::AliasFinder;
pub use index_finder::{IndexFinder, SharedIndexFinder};
pub use package_set::PackageSet;
