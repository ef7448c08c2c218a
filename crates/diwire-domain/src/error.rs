//! Error handling types

use std::fmt;

use thiserror::Error;

use crate::value_objects::DependencyId;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Ordered list of dependency IDs from the root request to the failure point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain(Vec<DependencyId>);

impl Chain {
    /// Create a chain from IDs ordered root first
    pub fn new(ids: Vec<DependencyId>) -> Self {
        Self(ids)
    }

    /// IDs in the chain, root first
    pub fn ids(&self) -> &[DependencyId] {
        &self.0
    }

    /// Number of IDs in the chain
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<DependencyId>> for Chain {
    fn from(ids: Vec<DependencyId>) -> Self {
        Self(ids)
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

/// Main error type for diwire
#[derive(Error, Debug)]
pub enum Error {
    /// No strategy could construct a required type
    #[error("unable to resolve {id} (requested by {chain})")]
    Unresolvable {
        /// The dependency that had no match
        id: DependencyId,
        /// Requesting chain, root first, ending with `id`
        chain: Chain,
    },

    /// A type requires itself through its own dependency closure
    #[error("circular dependency: {chain}")]
    Cycle {
        /// Full chain from the root, ending with the repeated ID
        chain: Chain,
    },

    /// An alias chain loops back on itself
    #[error("alias cycle: {chain}")]
    AliasCycle {
        /// Aliased IDs in the order they were followed
        chain: Chain,
    },

    /// A value could not be shaped to the type a consumer wants
    #[error("cannot pass {input} where {wanted} is wanted")]
    Coercion {
        /// The wanted type as rendered
        wanted: String,
        /// The input variable and its type
        input: String,
    },

    /// A provider returns an error the target function cannot propagate
    #[error("{provider} returns an error but {function} has no error result")]
    UnhandledError {
        /// Qualified provider name
        provider: String,
        /// Name of the target function
        function: String,
    },

    /// A type specifier string could not be parsed
    #[error("invalid type specifier {spec:?}: {reason}")]
    InvalidSpecifier {
        /// The offending input
        spec: String,
        /// What was wrong with it
        reason: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Source index or manifest could not be decoded
    #[error("Parse error: {message}")]
    Parse {
        /// Description of the parse failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure failure with context
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invariant violated inside the generator
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Resolution error creation methods
impl Error {
    /// Create an unresolvable error for `id` requested through `chain`
    pub fn unresolvable(id: DependencyId, chain: impl Into<Chain>) -> Self {
        Self::Unresolvable {
            id,
            chain: chain.into(),
        }
    }

    /// Create a dependency cycle error
    pub fn cycle(chain: impl Into<Chain>) -> Self {
        Self::Cycle {
            chain: chain.into(),
        }
    }

    /// Create an alias cycle error
    pub fn alias_cycle(chain: impl Into<Chain>) -> Self {
        Self::AliasCycle {
            chain: chain.into(),
        }
    }
}

// Emission error creation methods
impl Error {
    /// Create a coercion error
    pub fn coercion<W: Into<String>, I: Into<String>>(wanted: W, input: I) -> Self {
        Self::Coercion {
            wanted: wanted.into(),
            input: input.into(),
        }
    }

    /// Create an unhandled provider error
    pub fn unhandled_error<P: Into<String>, F: Into<String>>(provider: P, function: F) -> Self {
        Self::UnhandledError {
            provider: provider.into(),
            function: function.into(),
        }
    }
}

// Basic error creation methods
impl Error {
    /// Create an invalid specifier error
    pub fn invalid_specifier<S: Into<String>, R: Into<String>>(spec: S, reason: R) -> Self {
        Self::InvalidSpecifier {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// I/O and parse error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a parse error
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
            source: None,
        }
    }
}
