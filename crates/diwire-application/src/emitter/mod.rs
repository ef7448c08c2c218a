//! Source emission
//!
//! Turns a resolved [`Graph`] into a [`Provider`]: parameters are bound
//! first, then every constructed node is generated in emission order, then
//! the results are coerced to the types the signature declares.

mod coerce;
mod generator;
mod imports;
mod scope;
mod statement;

use std::collections::HashMap;

use diwire_domain::error::{Error, Result};
use diwire_domain::{Declaration, ERROR_TYPE, ERROR_VARIABLE, Function, Variable};

pub use coerce::coerce;
pub use generator::Generator;
pub use imports::{ImportSet, conventional_name};
pub use scope::{Scope, is_reserved, lower_camel};
pub use statement::Statement;

use crate::provider::{Param, Provider, ResultSlot};
use crate::resolver::{Edge, Graph, GraphResult, NodeIndex};

/// Generate the provider for `function` from its resolved `graph`
pub fn emit(function: &Function, graph: &Graph) -> Result<Provider> {
    let mut generator = Generator::new(function);
    let mut outputs: HashMap<NodeIndex, Vec<Variable>> = HashMap::new();

    let mut params = Vec::with_capacity(graph.params().len());
    for &index in graph.params() {
        let node = graph
            .node(index)
            .ok_or_else(|| Error::internal(format!("missing parameter node n{index}")))?;
        let Declaration::External(external) = &node.declaration else {
            return Err(Error::internal(format!("parameter node n{index} is not external")));
        };
        let type_expr = generator.qualify(&external.type_ref);
        let variables = generator.generate(&node.declaration, &[], |_| true)?;
        let variable = variables
            .first()
            .cloned()
            .ok_or_else(|| Error::internal("external produced no variable"))?;
        params.push(Param {
            variable,
            type_expr,
        });
        outputs.insert(index, variables);
    }

    let mut result_types = Vec::with_capacity(graph.results().len());
    let mut error_values = Vec::with_capacity(graph.results().len());
    for result in graph.results() {
        match result {
            GraphResult::Value { wanted, .. } => {
                result_types.push(generator.qualify(wanted));
                error_values.push(generator.zero_value(wanted));
            }
            GraphResult::Error => {
                result_types.push(ERROR_TYPE.to_string());
                error_values.push(ERROR_VARIABLE.to_string());
            }
        }
    }
    if function.has_error_result() {
        generator.set_error_return(error_values);
    }

    let consumed = graph.consumed();
    for index in graph.emission_order(function.hoist) {
        let node = graph
            .node(index)
            .ok_or_else(|| Error::internal(format!("missing node n{index}")))?;
        let inputs = node
            .inputs
            .iter()
            .map(|edge| output(&outputs, *edge))
            .collect::<Result<Vec<_>>>()?;
        let variables = generator.generate(&node.declaration, &inputs, |slot| {
            consumed.contains(&Edge::new(index, slot))
        })?;
        outputs.insert(index, variables);
    }

    let mut results = Vec::with_capacity(graph.results().len());
    for (result, type_expr) in graph.results().iter().zip(result_types) {
        match result {
            GraphResult::Value {
                underlying, edge, ..
            } => {
                let variable = output(&outputs, *edge)?;
                let expression = coerce(&underlying.type_name, underlying.kind, &variable)?;
                results.push(ResultSlot::Value {
                    variable,
                    type_expr,
                    expression,
                });
            }
            GraphResult::Error => results.push(ResultSlot::Error),
        }
    }

    let (imports, body) = generator.finish();
    Ok(Provider {
        name: function.name.clone(),
        target_import: function.target_import.clone(),
        imports,
        params,
        body,
        results,
    })
}

fn output(outputs: &HashMap<NodeIndex, Vec<Variable>>, edge: Edge) -> Result<Variable> {
    outputs
        .get(&edge.node)
        .and_then(|variables| variables.get(edge.slot))
        .cloned()
        .ok_or_else(|| {
            Error::internal(format!(
                "n{}.{} used before it was generated",
                edge.node, edge.slot
            ))
        })
}
