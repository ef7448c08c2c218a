use std::collections::BTreeSet;
use std::sync::Arc;

use diwire_domain::error::Result;
use diwire_domain::{Declaration, Dependency, DependencyId, TypeKind, TypeRef};

/// Facts about the current wire call that lookups may consult
///
/// The struct strategy uses this to accept builtin-typed fields that an
/// external parameter or an alias already supplies.
#[derive(Debug, Clone, Default)]
pub struct FindContext {
    covered: BTreeSet<DependencyId>,
}

impl FindContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as supplied without a lookup
    pub fn cover(&mut self, id: DependencyId) {
        self.covered.insert(id);
    }

    pub fn with_covered(mut self, id: DependencyId) -> Self {
        self.cover(id);
        self
    }

    pub fn covers(&self, id: &DependencyId) -> bool {
        self.covered.contains(id)
    }
}

/// Declaration Lookup Interface
///
/// Maps a requested [`Dependency`] to the [`Declaration`] that constructs
/// it. Implementations distinguish "no strategy applies" (`Ok(None)`) from
/// hard failures (`Err`); the resolver turns the former into an
/// unresolvable error carrying the requesting chain.
///
/// # Example
///
/// ```ignore
/// use diwire_application::ports::{FindContext, Finder};
///
/// let declaration = finder.find(&FindContext::new(), &dependency)?;
/// match declaration {
///     Some(found) => println!("{found}"),
///     None => println!("no match for {dependency}"),
/// }
/// ```
pub trait Finder: Send + Sync {
    /// Find the declaration constructing `dependency`
    fn find(&self, ctx: &FindContext, dependency: &Dependency) -> Result<Option<Declaration>>;

    /// Kind of the referenced type, when the finder knows better than the
    /// reference itself
    fn kind_of(&self, type_ref: &TypeRef) -> Result<TypeKind> {
        Ok(type_ref.kind)
    }

    /// The type `type_ref` names once source-level aliases are followed
    fn underlying(&self, type_ref: &TypeRef) -> Result<TypeRef> {
        Ok(type_ref.clone())
    }
}

impl<F: Finder + ?Sized> Finder for &F {
    fn find(&self, ctx: &FindContext, dependency: &Dependency) -> Result<Option<Declaration>> {
        (**self).find(ctx, dependency)
    }

    fn kind_of(&self, type_ref: &TypeRef) -> Result<TypeKind> {
        (**self).kind_of(type_ref)
    }

    fn underlying(&self, type_ref: &TypeRef) -> Result<TypeRef> {
        (**self).underlying(type_ref)
    }
}

impl<F: Finder + ?Sized> Finder for Arc<F> {
    fn find(&self, ctx: &FindContext, dependency: &Dependency) -> Result<Option<Declaration>> {
        (**self).find(ctx, dependency)
    }

    fn kind_of(&self, type_ref: &TypeRef) -> Result<TypeKind> {
        (**self).kind_of(type_ref)
    }

    fn underlying(&self, type_ref: &TypeRef) -> Result<TypeRef> {
        (**self).underlying(type_ref)
    }
}
