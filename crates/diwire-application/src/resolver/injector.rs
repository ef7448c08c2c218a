//! The wire use case: resolve a target function's results and emit the
//! provider that constructs them

use std::collections::HashMap;

use diwire_domain::error::{Error, Result};
use diwire_domain::{Declaration, Dependency, DependencyId, Function};
use tracing::{debug, info};

use super::graph::{Edge, Graph, GraphResult, Node};
use crate::emitter::emit;
use crate::finder::AliasFinder;
use crate::ports::{FindContext, Finder};
use crate::provider::Provider;

/// Resolves target functions against a [`Finder`]
///
/// Holds no per-call state, so one injector can serve many wire calls,
/// including from several threads at once.
#[derive(Debug, Clone)]
pub struct Injector<F> {
    finder: F,
}

impl<F: Finder> Injector<F> {
    pub fn new(finder: F) -> Self {
        Self { finder }
    }

    pub fn finder(&self) -> &F {
        &self.finder
    }

    /// Build the dependency graph for `function` without emitting code
    pub fn resolve(&self, function: &Function) -> Result<Graph> {
        let mut resolution = Resolution::new(&self.finder, function)?;
        for result in &function.results {
            resolution.resolve_result(result)?;
        }
        let mut graph = resolution.into_graph();
        if function.hoist {
            let hoisted = graph.mark_hoisted();
            debug!(hoisted, "hoisted externally derived nodes");
        }
        Ok(graph)
    }

    /// Resolve `function` and generate its provider
    pub fn wire(&self, function: &Function) -> Result<Provider> {
        info!(
            function = %function.name,
            target = %function.target_import,
            results = function.results.len(),
            "wiring provider"
        );
        let graph = self.resolve(function)?;
        let provider = emit(function, &graph)?;
        info!(
            function = %function.name,
            statements = provider.body.len(),
            imports = provider.imports.len(),
            "provider generated"
        );
        Ok(provider)
    }
}

/// Mutable state of one wire call
struct Resolution<'a, F> {
    finder: AliasFinder<'a, F>,
    ctx: FindContext,
    /// Completed declarations by every ID they provide
    memo: HashMap<DependencyId, Edge>,
    /// Declarations currently being resolved, root first
    stack: Vec<DependencyId>,
    graph: Graph,
}

impl<'a, F: Finder> Resolution<'a, F> {
    fn new(finder: &'a F, function: &'a Function) -> Result<Self> {
        let mut ctx = FindContext::new();
        for (id, _) in function.aliases.iter() {
            ctx.cover(id.clone());
        }

        let mut resolution = Self {
            finder: AliasFinder::new(finder, &function.aliases),
            ctx,
            memo: HashMap::new(),
            stack: Vec::new(),
            graph: Graph::new(),
        };

        for param in &function.params {
            let mut external = param.clone();
            external.type_ref.kind = finder.kind_of(&external.type_ref)?;
            let id = external.id();
            if resolution.memo.contains_key(&id) {
                return Err(Error::invalid_argument(format!(
                    "{id} is supplied by more than one parameter"
                )));
            }
            let index = resolution
                .graph
                .push_param(Node::new(Declaration::External(external), Vec::new()));
            resolution.memo.insert(id.clone(), Edge::new(index, 0));
            resolution.ctx.cover(id);
        }
        Ok(resolution)
    }

    fn resolve_result(&mut self, result: &Dependency) -> Result<()> {
        if result.is_error() {
            self.graph.push_result(GraphResult::Error);
            return Ok(());
        }
        let edge = self.resolve(result)?;
        let mut wanted = result.type_ref();
        wanted.kind = self.finder.kind_of(&wanted)?;
        let underlying = self.finder.underlying(&wanted)?;
        self.graph.push_result(GraphResult::Value {
            wanted,
            underlying,
            edge,
        });
        Ok(())
    }

    fn resolve(&mut self, dependency: &Dependency) -> Result<Edge> {
        let requested = dependency.id();
        if let Some(edge) = self.memo.get(&requested) {
            return Ok(*edge);
        }

        let target = self.finder.resolve_alias(dependency)?;
        let target_id = target.id();
        if let Some(edge) = self.memo.get(&target_id).copied() {
            self.memo.insert(requested, edge);
            return Ok(edge);
        }

        let Some(declaration) = self.finder.inner().find(&self.ctx, &target)? else {
            let mut chain = self.stack.clone();
            chain.push(requested.clone());
            if target_id != requested {
                chain.push(target_id.clone());
            }
            return Err(Error::unresolvable(target_id, chain));
        };

        let declaration_id = declaration.id();
        if let Some(edge) = self.memo.get(&declaration_id).copied() {
            self.memo.insert(requested, edge);
            self.memo.insert(target_id, edge);
            return Ok(edge);
        }
        if self.stack.contains(&declaration_id) {
            let mut chain = self.stack.clone();
            chain.push(declaration_id);
            return Err(Error::cycle(chain));
        }

        self.stack.push(declaration_id.clone());
        let mut inputs = Vec::new();
        for child in declaration.dependencies() {
            inputs.push(self.resolve(&child)?);
        }
        self.stack.pop();

        let provided = declaration.provided_ids();
        let slot = match &declaration {
            Declaration::Function(function) => function.provided_slot(),
            _ => 0,
        };
        debug!(id = %declaration_id, inputs = inputs.len(), "resolved {declaration}");
        let index = self.graph.push(Node::new(declaration, inputs));
        self.graph.finish(index);

        // An aliased ID resolves through its alias, never to a side result
        for (id, output) in provided {
            if self.finder.is_aliased(&id) {
                continue;
            }
            self.memo.entry(id).or_insert(Edge::new(index, output));
        }
        let edge = Edge::new(index, slot);
        self.memo.insert(requested, edge);
        self.memo.insert(target_id, edge);
        Ok(edge)
    }

    fn into_graph(self) -> Graph {
        self.graph
    }
}
