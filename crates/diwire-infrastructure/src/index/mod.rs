//! Source index loading
//!
//! Stands in for a real source parser: packages are described in TOML or
//! JSON manifests and collected into a
//! [`PackageSet`](diwire_application::PackageSet) that backs the
//! `SourceIndex` port.

pub mod manifest;

pub use manifest::{IndexManifest, load_index, read_manifest};
