//! Generated provider functions

use std::fmt;
use std::fmt::Write as _;

use diwire_domain::{ERROR_TYPE, Import, Variable};

use crate::emitter::Statement;

/// A parameter of the generated function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub variable: Variable,
    /// Rendered parameter type
    pub type_expr: String,
}

/// One entry of the generated function's result list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultSlot {
    Value {
        variable: Variable,
        /// Rendered result type
        type_expr: String,
        /// Expression returned for this slot
        expression: String,
    },
    /// Renders as `nil` in the final return
    Error,
}

impl ResultSlot {
    pub fn type_expr(&self) -> &str {
        match self {
            Self::Value { type_expr, .. } => type_expr,
            Self::Error => ERROR_TYPE,
        }
    }

    pub fn variable(&self) -> Option<&Variable> {
        match self {
            Self::Value { variable, .. } => Some(variable),
            Self::Error => None,
        }
    }
}

/// The output of a wire call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    pub name: String,
    pub target_import: String,
    /// Sorted by path, then name
    pub imports: Vec<Import>,
    pub params: Vec<Param>,
    pub body: Vec<Statement>,
    pub results: Vec<ResultSlot>,
}

impl Provider {
    /// Variables carrying the non-error results, in result order
    pub fn result_variables(&self) -> Vec<&Variable> {
        self.results.iter().filter_map(ResultSlot::variable).collect()
    }

    /// The import block, or an empty string when nothing is imported
    pub fn render_imports(&self) -> String {
        if self.imports.is_empty() {
            return String::new();
        }
        let mut out = String::from("import (\n");
        for import in &self.imports {
            let _ = writeln!(out, "\t{import}");
        }
        out.push_str(")\n");
        out
    }

    /// `func Name(params) results`
    pub fn render_signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.variable.name, p.type_expr))
            .collect();
        let results: Vec<&str> = self.results.iter().map(ResultSlot::type_expr).collect();
        let results = match results.as_slice() {
            [] => String::new(),
            [single] => format!(" {single}"),
            many => format!(" ({})", many.join(", ")),
        };
        format!("func {}({}){results}", self.name, params.join(", "))
    }

    /// The function declaration with its body
    pub fn render_function(&self) -> String {
        let mut out = self.render_signature();
        out.push_str(" {\n");
        for statement in &self.body {
            for line in statement.lines() {
                let _ = writeln!(out, "\t{line}");
            }
        }
        if !self.results.is_empty() {
            let values: Vec<&str> = self
                .results
                .iter()
                .map(|slot| match slot {
                    ResultSlot::Value { expression, .. } => expression.as_str(),
                    ResultSlot::Error => "nil",
                })
                .collect();
            let _ = writeln!(out, "\treturn {}", values.join(", "));
        }
        out.push_str("}\n");
        out
    }

    /// Import block followed by the function
    pub fn render(&self) -> String {
        let imports = self.render_imports();
        if imports.is_empty() {
            return self.render_function();
        }
        format!("{imports}\n{}", self.render_function())
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
