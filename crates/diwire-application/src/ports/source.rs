use std::sync::Arc;

use diwire_domain::error::Result;
use diwire_domain::source::SourcePackage;

/// Package Metadata Interface
///
/// Answers "what does the package at this import path declare". A parser
/// backed implementation may load lazily; `Ok(None)` means the path is not
/// known to the index.
pub trait SourceIndex: Send + Sync {
    /// Look up the package at `import_path`
    fn package(&self, import_path: &str) -> Result<Option<Arc<SourcePackage>>>;
}

impl<S: SourceIndex + ?Sized> SourceIndex for Arc<S> {
    fn package(&self, import_path: &str) -> Result<Option<Arc<SourcePackage>>> {
        (**self).package(import_path)
    }
}
