//! Declaration lookup against a source index
//!
//! Strategies, tried in order for a type or field dependency:
//!
//! 1. an exported function of the type's package returning the type
//! 2. the struct itself, when it can be built with a composite literal
//! 3. a source-level type alias, followed to its underlying type

use std::sync::Arc;

use diwire_domain::error::{Error, Result};
use diwire_domain::source::{SourceFunction, SourcePackage, SourceType};
use diwire_domain::{
    Declaration, Dependency, DependencyId, FunctionProvider, Struct, TypeKind, TypeRef,
    is_exported,
};
use tracing::trace;

use crate::ports::{FindContext, Finder, SourceIndex};

/// [`Finder`] backed by a [`SourceIndex`]
#[derive(Debug, Clone)]
pub struct IndexFinder<I> {
    index: I,
}

impl<I: SourceIndex> IndexFinder<I> {
    pub fn new(index: I) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    fn find_type(&self, ctx: &FindContext, type_ref: &TypeRef) -> Result<Option<Declaration>> {
        if type_ref.is_builtin() {
            trace!(id = %type_ref.id(), "builtin types are never constructed");
            return Ok(None);
        }
        let Some(package) = self.index.package(&type_ref.import)? else {
            trace!(import = %type_ref.import, "package not in index");
            return Ok(None);
        };

        if let Some(provider) = self.try_function(&package, type_ref)? {
            return Ok(Some(Declaration::Function(provider)));
        }
        if let Some(s) = self.try_struct(ctx, &package, type_ref)? {
            return Ok(Some(Declaration::Struct(s)));
        }
        if package.find_alias(type_ref.type_name.base()).is_some() {
            let mut alias = type_ref.clone();
            alias.kind = TypeKind::Alias;
            let target = self.follow_source_aliases(alias)?;
            if target.id() == type_ref.id() {
                return Ok(None);
            }
            trace!(from = %type_ref.id(), to = %target.id(), "following source alias");
            return self.find_type(ctx, &target);
        }
        Ok(None)
    }

    /// First exported function returning the requested type
    ///
    /// A result with the same pointer depth wins over an earlier result with
    /// only the same base name.
    fn try_function(
        &self,
        package: &SourcePackage,
        type_ref: &TypeRef,
    ) -> Result<Option<FunctionProvider>> {
        let wanted = &type_ref.type_name;
        let mut fallback: Option<(&SourceFunction, usize)> = None;
        for function in package.functions.iter().filter(|f| is_exported(&f.name)) {
            for (index, result) in function.results.iter().enumerate() {
                let result_ref = result.to_type_ref(&package.import_path);
                if result_ref.import != type_ref.import || !result.name.same_base(wanted) {
                    continue;
                }
                if result.name.pointer_depth() == wanted.pointer_depth() {
                    return self.provider(package, function, index).map(Some);
                }
                fallback.get_or_insert((function, index));
            }
        }
        match fallback {
            Some((function, index)) => self.provider(package, function, index).map(Some),
            None => Ok(None),
        }
    }

    fn provider(
        &self,
        package: &SourcePackage,
        function: &SourceFunction,
        provides: usize,
    ) -> Result<FunctionProvider> {
        let params = function
            .params
            .iter()
            .map(|p| self.resolve_source_type(p, package).map(Dependency::from))
            .collect::<Result<Vec<_>>>()?;
        let results = function
            .results
            .iter()
            .map(|r| self.resolve_source_type(r, package))
            .collect::<Result<Vec<_>>>()?;
        Ok(FunctionProvider {
            import: package.import_path.clone(),
            package: package.name.clone(),
            name: function.name.clone(),
            params,
            results,
            provides,
        })
    }

    /// The struct named by the request, if it can be auto-wired
    fn try_struct(
        &self,
        ctx: &FindContext,
        package: &SourcePackage,
        type_ref: &TypeRef,
    ) -> Result<Option<Struct>> {
        let Some(source) = package.find_struct(type_ref.type_name.base()) else {
            return Ok(None);
        };
        if !is_exported(&source.name) {
            trace!(name = %source.name, "struct is not exported");
            return Ok(None);
        }

        let mut declaration = Struct::new(package.import_path.clone(), type_ref.type_name.clone());
        declaration.package.clone_from(&package.name);
        declaration.module.clone_from(&package.module);
        for field in &source.fields {
            if !is_exported(&field.name) {
                trace!(owner = %source.name, field = %field.name, "unexported field");
                return Ok(None);
            }
            let field_ref = self.resolve_source_type(&field.ty, package)?;
            if field_ref.is_builtin() && !ctx.covers(&field_ref.id()) {
                trace!(owner = %source.name, field = %field.name, "uncovered builtin field");
                return Ok(None);
            }
            declaration = declaration.with_field(field.name.clone(), field_ref);
        }
        Ok(Some(declaration))
    }

    /// Qualify a declared type and follow it through source aliases
    fn resolve_source_type(&self, ty: &SourceType, home: &SourcePackage) -> Result<TypeRef> {
        let type_ref = self.qualify_source_type(ty, home)?;
        self.follow_source_aliases(type_ref)
    }

    /// Replace a source alias by the type it names
    ///
    /// `*Name` where `type Name = T` becomes `*T`. Go treats both as the same
    /// type, so consumers can be handed the underlying value as is.
    fn follow_source_aliases(&self, type_ref: TypeRef) -> Result<TypeRef> {
        let mut current = type_ref;
        let mut seen: Vec<DependencyId> = Vec::new();
        while current.kind == TypeKind::Alias {
            let Some(package) = self.index.package(&current.import)? else {
                break;
            };
            let Some(alias) = package.find_alias(current.type_name.base()) else {
                break;
            };
            let id = current.id();
            if seen.contains(&id) {
                seen.push(id);
                return Err(Error::alias_cycle(seen));
            }
            seen.push(id);
            let target = self.qualify_source_type(&alias.target, &package)?;
            let depth = target
                .type_name
                .pointer_depth()
                .saturating_add(current.type_name.pointer_depth());
            current = target.with_type_name(target.type_name.with_depth(depth));
        }
        Ok(current)
    }

    /// Qualify a declared type and fill in its kind from the index
    fn qualify_source_type(&self, ty: &SourceType, home: &SourcePackage) -> Result<TypeRef> {
        let mut type_ref = ty.to_type_ref(&home.import_path);
        if type_ref.import == home.import_path {
            type_ref.package.clone_from(&home.name);
            type_ref.module.clone_from(&home.module);
        }
        if type_ref.kind == TypeKind::Unknown {
            type_ref.kind = self.lookup_kind(&type_ref)?;
        }
        if type_ref.package.is_none()
            && !type_ref.import.is_empty()
            && let Some(package) = self.index.package(&type_ref.import)?
        {
            type_ref.package.clone_from(&package.name);
        }
        Ok(type_ref)
    }

    fn lookup_kind(&self, type_ref: &TypeRef) -> Result<TypeKind> {
        if type_ref.is_builtin() {
            return Ok(TypeKind::Builtin);
        }
        let kind = self
            .index
            .package(&type_ref.import)?
            .and_then(|package| package.kind_of(type_ref.type_name.base()))
            .unwrap_or(TypeKind::Unknown);
        Ok(kind)
    }
}

impl<I: SourceIndex> Finder for IndexFinder<I> {
    fn find(&self, ctx: &FindContext, dependency: &Dependency) -> Result<Option<Declaration>> {
        match dependency {
            Dependency::Struct(s) => Ok(Some(Declaration::Struct(s.clone()))),
            Dependency::Error => Ok(Some(Declaration::Error)),
            Dependency::Type(type_ref) => self.find_type(ctx, type_ref),
            Dependency::Field(field) => self.find_type(ctx, &field.type_ref()),
        }
    }

    fn kind_of(&self, type_ref: &TypeRef) -> Result<TypeKind> {
        if type_ref.kind != TypeKind::Unknown {
            return Ok(type_ref.kind);
        }
        self.lookup_kind(type_ref)
    }

    fn underlying(&self, type_ref: &TypeRef) -> Result<TypeRef> {
        let mut type_ref = type_ref.clone();
        type_ref.kind = self.kind_of(&type_ref)?;
        self.follow_source_aliases(type_ref)
    }
}

/// Finder over a type-erased index
pub type SharedIndexFinder = IndexFinder<Arc<dyn SourceIndex>>;
