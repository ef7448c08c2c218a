//! `diwire wire`

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use diwire_application::resolver::Graph;
use diwire_application::{IndexFinder, Injector, Provider};
use diwire_domain::error::{Error, Result};
use diwire_domain::{Dependency, External, Function, TypeRef, is_identifier};
use diwire_infrastructure::{ErrorContext, WireConfig, load_index};
use tracing::{debug, info};

/// Arguments of the `wire` command
///
/// Type specifiers take the forms `import/path.Type`, `import/path.*Type`,
/// `"import/path".*Type`, `*import/path.Type`, a builtin such as `string`,
/// or `error`.
#[derive(Args, Debug, Clone, Default)]
pub struct WireArgs {
    /// Source index manifest, or a directory of manifests
    #[arg(short, long, value_name = "PATH")]
    pub index: Option<PathBuf>,

    /// Result type of the generated function (repeatable, in order)
    #[arg(short, long = "dependency", value_name = "SPEC", required = true)]
    pub dependencies: Vec<String>,

    /// Parameter of the generated function, optionally named `NAME=SPEC`
    #[arg(short, long = "external", value_name = "SPEC")]
    pub externals: Vec<String>,

    /// Substitute one type for another during resolution
    #[arg(short, long = "map", value_name = "FROM=TO")]
    pub maps: Vec<String>,

    /// Import path of the package the function is generated into
    #[arg(short, long, value_name = "IMPORT")]
    pub target: Option<String>,

    /// Name of the generated function
    #[arg(short, long)]
    pub name: Option<String>,

    /// Construct values derived only from parameters first
    #[arg(long)]
    pub hoist: bool,

    /// Print the resolved graph to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the graph in Graphviz DOT format (with --verbose)
    #[arg(long, requires = "verbose")]
    pub dot: bool,

    /// Write the generated source to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Everything a wire call produced
#[derive(Debug, Clone)]
pub struct WireOutcome {
    pub function: Function,
    /// Present with `--verbose`
    pub graph: Option<Graph>,
    pub provider: Provider,
}

impl WireArgs {
    /// Build the target function, falling back to `defaults`
    pub fn function(&self, defaults: &WireConfig) -> Result<Function> {
        let name = self.name.as_deref().unwrap_or(&defaults.function_name);
        if !is_identifier(name) {
            return Err(Error::invalid_argument(format!(
                "function name {name:?} is not an identifier"
            )));
        }
        let target = self
            .target
            .as_deref()
            .or(defaults.target.as_deref())
            .ok_or_else(|| Error::invalid_argument("no target import path (use --target)"))?;

        let mut function = Function::new(name, target).with_hoist(self.hoist || defaults.hoist);
        for spec in &self.externals {
            function = function.with_param(parse_external(spec)?);
        }
        for spec in &self.dependencies {
            function = function.with_result(Dependency::parse(spec)?);
        }
        for spec in &self.maps {
            let (from, to) = spec
                .split_once('=')
                .ok_or_else(|| Error::invalid_specifier(spec.as_str(), "expected FROM=TO"))?;
            let from = Dependency::parse(from.trim())?;
            function = function.with_alias(&from, Dependency::parse(to.trim())?);
        }
        Ok(function)
    }

    /// Resolve and emit without writing anything
    ///
    /// The graph is only kept with `--verbose`.
    pub fn execute(&self, defaults: &WireConfig) -> Result<WireOutcome> {
        let index_path = self
            .index
            .as_ref()
            .or(defaults.index.as_ref())
            .ok_or_else(|| Error::invalid_argument("no source index (use --index)"))?;
        let function = self.function(defaults)?;
        let index = load_index(index_path)?;
        let injector = Injector::new(IndexFinder::new(index));

        let graph = if self.verbose {
            let graph = injector.resolve(&function)?;
            debug!(nodes = graph.nodes().len(), "graph resolved");
            Some(graph)
        } else {
            None
        };
        let provider = injector.wire(&function)?;
        Ok(WireOutcome {
            function,
            graph,
            provider,
        })
    }

    /// Execute and write the rendered provider to `--output` or stdout
    pub fn run(&self, defaults: &WireConfig) -> Result<()> {
        let outcome = self.execute(defaults)?;
        if let Some(graph) = &outcome.graph {
            let graph = if self.dot {
                graph.to_dot()
            } else {
                graph.to_string()
            };
            eprint!("{graph}");
        }

        let source = outcome.provider.render();
        match &self.output {
            Some(path) => {
                fs::write(path, &source)
                    .io_context(format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), "provider written");
            }
            None => io::stdout()
                .lock()
                .write_all(source.as_bytes())
                .io_context("Failed to write to stdout")?,
        }
        Ok(())
    }
}

/// `NAME=SPEC` or `SPEC`
fn parse_external(spec: &str) -> Result<External> {
    match spec.split_once('=') {
        Some((name, ty)) => {
            let name = name.trim();
            if !is_identifier(name) {
                return Err(Error::invalid_specifier(
                    spec,
                    "parameter name is not an identifier",
                ));
            }
            Ok(External::new(TypeRef::parse(ty.trim())?).with_name(name))
        }
        None => Ok(External::new(TypeRef::parse(spec)?)),
    }
}
