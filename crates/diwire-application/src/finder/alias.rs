//! Alias substitution in front of another finder

use diwire_domain::error::{Error, Result};
use diwire_domain::{Aliases, Declaration, Dependency, DependencyId, TypeKind, TypeRef};
use tracing::trace;

use crate::ports::{FindContext, Finder};

/// Rewrites requests through an [`Aliases`] map before delegating
///
/// Aliases are followed transitively: with `A -> B` and `B -> C` a request
/// for `A` is looked up as `C`. A chain that revisits an ID is an
/// [`Error::AliasCycle`].
#[derive(Debug)]
pub struct AliasFinder<'a, F> {
    inner: &'a F,
    aliases: &'a Aliases,
}

impl<'a, F: Finder> AliasFinder<'a, F> {
    pub fn new(inner: &'a F, aliases: &'a Aliases) -> Self {
        Self { inner, aliases }
    }

    pub fn inner(&self) -> &'a F {
        self.inner
    }

    /// Whether requests for `id` are redirected elsewhere
    pub fn is_aliased(&self, id: &DependencyId) -> bool {
        self.aliases.contains(id)
    }

    /// Follow aliases from `dependency` to the final replacement
    pub fn resolve_alias(&self, dependency: &Dependency) -> Result<Dependency> {
        let mut current = dependency.clone();
        let mut chain = vec![current.id()];
        while let Some(next) = self.aliases.get(&current.id()) {
            let next_id = next.id();
            if chain.contains(&next_id) {
                chain.push(next_id);
                return Err(Error::alias_cycle(chain));
            }
            trace!(from = %current.id(), to = %next_id, "alias");
            chain.push(next_id);
            current = next.clone();
        }
        Ok(current)
    }
}

impl<F: Finder> Finder for AliasFinder<'_, F> {
    fn find(&self, ctx: &FindContext, dependency: &Dependency) -> Result<Option<Declaration>> {
        let target = self.resolve_alias(dependency)?;
        self.inner.find(ctx, &target)
    }

    fn kind_of(&self, type_ref: &TypeRef) -> Result<TypeKind> {
        self.inner.kind_of(type_ref)
    }

    fn underlying(&self, type_ref: &TypeRef) -> Result<TypeRef> {
        self.inner.underlying(type_ref)
    }
}
