//! # Infrastructure Layer
//!
//! Technical concerns around the wire pass: where configuration comes from,
//! where logs go and how a source index is read from disk.
//!
//! ## Module Categories
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment layering of defaults, TOML file and environment |
//! | [`constants`] | File names, environment prefixes and defaults |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing, written to stderr |
//!
//! ### Source Index
//! | Module | Description |
//! |--------|-------------|
//! | [`index`] | TOML / JSON package manifests loaded into a `PackageSet` |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod index;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader, LoggingConfig, WireConfig};
pub use error_ext::ErrorContext;
pub use index::{IndexManifest, load_index};
