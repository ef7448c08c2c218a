//! Configuration management
//!
//! [`ConfigLoader`] merges defaults, an optional TOML file and `DIWIRE__`
//! environment variables into an [`AppConfig`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
