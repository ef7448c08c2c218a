//! Statement generation for resolved declarations

use diwire_domain::error::{Error, Result};
use diwire_domain::{
    Declaration, ERROR_VARIABLE, External, Function, FunctionProvider, Import, NUMERIC_TYPES,
    POINTER_MARKER, Struct, TypeKind, TypeRef, Variable,
};
use tracing::trace;

use super::coerce::coerce;
use super::imports::ImportSet;
use super::scope::Scope;
use super::statement::Statement;

const BLANK_IDENTIFIER: &str = "_";

/// Per-call emission state: names, imports and the statements so far
#[derive(Debug, Clone)]
pub struct Generator {
    function: String,
    scope: Scope,
    imports: ImportSet,
    statements: Vec<Statement>,
    /// Values returned when a provider fails; `None` when the target
    /// function cannot return an error
    error_return: Option<Vec<String>>,
}

impl Generator {
    pub fn new(function: &Function) -> Self {
        Self {
            function: function.name.clone(),
            scope: Scope::new(),
            imports: ImportSet::new(function.target_import.clone()),
            statements: Vec::new(),
            error_return: None,
        }
    }

    /// Values of the early return taken when a provider returns an error
    pub fn set_error_return(&mut self, values: Vec<String>) {
        self.error_return = Some(values);
    }

    /// Type expression for `type_ref`, importing its package if needed
    pub fn qualify(&mut self, type_ref: &TypeRef) -> String {
        let depth = usize::from(type_ref.type_name.pointer_depth());
        let marker: String = std::iter::repeat_n(POINTER_MARKER, depth).collect();
        let base = type_ref.type_name.base();
        match self.import(&type_ref.import, type_ref.package.as_deref()) {
            Some(qualifier) => format!("{marker}{qualifier}.{base}"),
            None => format!("{marker}{base}"),
        }
    }

    /// Zero value of `type_ref` in the generated language
    pub fn zero_value(&mut self, type_ref: &TypeRef) -> String {
        let name = &type_ref.type_name;
        if name.is_pointer() || type_ref.kind.is_interface() {
            return "nil".to_string();
        }
        if type_ref.is_builtin() {
            return match name.base() {
                "string" => "\"\"".to_string(),
                "bool" => "false".to_string(),
                base if NUMERIC_TYPES.contains(&base) => "0".to_string(),
                _ => "nil".to_string(),
            };
        }
        let qualified = self.qualify(type_ref);
        if type_ref.kind == TypeKind::Struct {
            format!("{qualified}{{}}")
        } else {
            format!("*new({qualified})")
        }
    }

    /// Emit the construction of `declaration` from `inputs`, one input per
    /// dependency, returning one variable per output slot
    ///
    /// Function results whose slot is not `consumed` are assigned to `_`.
    pub fn generate(
        &mut self,
        declaration: &Declaration,
        inputs: &[Variable],
        consumed: impl Fn(usize) -> bool,
    ) -> Result<Vec<Variable>> {
        match declaration {
            Declaration::Struct(s) => self.generate_struct(s, inputs).map(|v| vec![v]),
            Declaration::Function(provider) => {
                self.generate_function(provider, inputs, consumed)
            }
            Declaration::External(external) => self.bind_external(external).map(|v| vec![v]),
            Declaration::Error => Err(Error::internal("the error sentinel cannot be constructed")),
        }
    }

    /// Imports and statements accumulated so far
    pub fn finish(self) -> (Vec<Import>, Vec<Statement>) {
        (self.imports.to_vec(), self.statements)
    }

    fn import(&mut self, path: &str, package: Option<&str>) -> Option<String> {
        self.imports.add(&mut self.scope, path, package)
    }

    fn generate_struct(&mut self, s: &Struct, inputs: &[Variable]) -> Result<Variable> {
        if inputs.len() != s.fields.len() {
            return Err(Error::internal(format!(
                "{} has {} fields but {} inputs",
                s.id(),
                s.fields.len(),
                inputs.len()
            )));
        }
        let prefix = match s.type_name.pointer_depth() {
            0 => "",
            1 => "&",
            _ => {
                return Err(Error::internal(format!(
                    "cannot build {} with a composite literal",
                    s.id()
                )));
            }
        };
        let literal_type = self.qualify(&s.type_ref().with_type_name(s.type_name.elem()));

        let mut fields = Vec::with_capacity(inputs.len());
        for (field, input) in s.fields.iter().zip(inputs) {
            let value = coerce(&field.type_name, field.kind, input)?;
            fields.push(format!("{}: {value}", field.name));
        }

        let name = self.scope.declare(s.type_name.base());
        trace!(variable = %name, "struct literal");
        self.statements.push(Statement::Assign {
            names: vec![name.clone()],
            expression: format!("{prefix}{literal_type}{{{}}}", fields.join(", ")),
        });
        Ok(Variable::new(
            s.import.clone(),
            name,
            s.type_name.clone(),
            TypeKind::Struct,
        ))
    }

    fn generate_function(
        &mut self,
        provider: &FunctionProvider,
        inputs: &[Variable],
        consumed: impl Fn(usize) -> bool,
    ) -> Result<Vec<Variable>> {
        if inputs.len() != provider.params.len() {
            return Err(Error::internal(format!(
                "{provider} takes {} arguments but {} inputs",
                provider.params.len(),
                inputs.len()
            )));
        }
        let returns_error = provider.returns_error();
        if returns_error && self.error_return.is_none() {
            return Err(Error::unhandled_error(
                provider.to_string(),
                self.function.clone(),
            ));
        }

        let mut args = Vec::with_capacity(inputs.len());
        for (param, input) in provider.params.iter().zip(inputs) {
            let wanted = param.type_ref();
            args.push(coerce(&wanted.type_name, wanted.kind, input)?);
        }
        let callee = match self.import(&provider.import, provider.package.as_deref()) {
            Some(qualifier) => format!("{qualifier}.{}", provider.name),
            None => provider.name.clone(),
        };

        let mut names = Vec::with_capacity(provider.results.len());
        let mut variables = Vec::new();
        for result in &provider.results {
            if result.is_error() {
                names.push(ERROR_VARIABLE.to_string());
                continue;
            }
            let name = if consumed(variables.len()) {
                self.scope.declare(result.type_name.base())
            } else {
                BLANK_IDENTIFIER.to_string()
            };
            names.push(name.clone());
            variables.push(Variable::new(
                result.import.clone(),
                name,
                result.type_name.clone(),
                result.kind,
            ));
        }

        trace!(callee = %callee, results = names.len(), "provider call");
        self.statements.push(Statement::Assign {
            names,
            expression: format!("{callee}({})", args.join(", ")),
        });
        if returns_error && let Some(values) = &self.error_return {
            self.statements.push(Statement::ReturnOnError {
                values: values.clone(),
            });
        }
        Ok(variables)
    }

    fn bind_external(&mut self, external: &External) -> Result<Variable> {
        let type_ref = &external.type_ref;
        let name = match &external.name {
            Some(name) => {
                if !self.scope.claim(name) {
                    return Err(Error::invalid_argument(format!(
                        "parameter name {name} is already in use"
                    )));
                }
                name.clone()
            }
            None => self.scope.declare(type_ref.type_name.base()),
        };
        Ok(Variable::new(
            type_ref.import.clone(),
            name,
            type_ref.type_name.clone(),
            type_ref.kind,
        ))
    }
}
