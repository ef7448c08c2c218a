//! # diwire
//!
//! Compile-time dependency injection: given the results a function should
//! return and the values it receives, diwire finds a constructor for every
//! type in between and generates the function body.
//!
//! ## Example
//!
//! ```ignore
//! use diwire::application::{IndexFinder, Injector};
//! use diwire::domain::{Dependency, Function};
//! use diwire::infrastructure::load_index;
//!
//! let index = load_index("index.toml".as_ref())?;
//! let injector = Injector::new(IndexFinder::new(index));
//! let function = Function::new("Initialize", "app.com/main")
//!     .with_result(Dependency::parse("app.com/web.*Web")?);
//! println!("{}", injector.wire(&function)?);
//! ```
//!
//! ## Architecture
//!
//! - `domain` - dependency and declaration model, errors
//! - `application` - finder strategies, graph resolution, emission
//! - `infrastructure` - configuration, logging, source index manifests
//! - `cli` - the `diwire` command line

/// Domain layer - dependency model and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use diwire_domain::*;
}

/// Application layer - the wire pass
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use diwire_application::*;
}

/// Infrastructure layer - config, logging and index loading
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use diwire_infrastructure::*;
}

pub mod cli;

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the wire entry points at the crate root
pub use application::{Injector, Provider};
pub use cli::{Cli, Commands, WireArgs};
