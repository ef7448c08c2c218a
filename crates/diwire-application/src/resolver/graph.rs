//! Resolved dependency graph
//!
//! Nodes live in an arena and refer to each other by index. Each node
//! records the output slot of every input it consumes, so a function that
//! returns several values can feed different consumers from different
//! results.

use std::collections::HashSet;
use std::fmt;
use std::fmt::Write as _;

use diwire_domain::{Declaration, TypeRef};

/// Index of a node in the graph arena
pub type NodeIndex = usize;

/// Reference to one output of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub node: NodeIndex,
    pub slot: usize,
}

impl Edge {
    pub fn new(node: NodeIndex, slot: usize) -> Self {
        Self { node, slot }
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub declaration: Declaration,
    /// One edge per dependency of the declaration, in declaration order
    pub inputs: Vec<Edge>,
    /// Set for nodes emitted ahead of the rest when hoisting
    pub hoisted: bool,
}

impl Node {
    pub fn new(declaration: Declaration, inputs: Vec<Edge>) -> Self {
        Self {
            declaration,
            inputs,
            hoisted: false,
        }
    }

    pub fn is_external(&self) -> bool {
        self.declaration.is_external()
    }
}

/// One entry of the target function's result list
#[derive(Debug, Clone)]
pub enum GraphResult {
    /// A constructed value and the type the signature declares for it
    Value {
        wanted: TypeRef,
        /// `wanted` with source aliases followed, the type the value is
        /// coerced to
        underlying: TypeRef,
        edge: Edge,
    },
    /// The error slot
    Error,
}

/// Arena of resolved declarations plus emission bookkeeping
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    /// External nodes in parameter order
    params: Vec<NodeIndex>,
    /// Constructed nodes in post-order
    order: Vec<NodeIndex>,
    results: Vec<GraphResult>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Register an external parameter node
    pub(crate) fn push_param(&mut self, node: Node) -> NodeIndex {
        let index = self.push(node);
        self.params.push(index);
        index
    }

    /// Record that `index` is complete; its inputs were finished earlier
    pub(crate) fn finish(&mut self, index: NodeIndex) {
        self.order.push(index);
    }

    pub(crate) fn push_result(&mut self, result: GraphResult) {
        self.results.push(result);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn params(&self) -> &[NodeIndex] {
        &self.params
    }

    /// Constructed nodes in post-order
    pub fn order(&self) -> &[NodeIndex] {
        &self.order
    }

    pub fn results(&self) -> &[GraphResult] {
        &self.results
    }

    /// Every node output read by another node or by a result
    pub fn consumed(&self) -> HashSet<Edge> {
        let inputs = self.nodes.iter().flat_map(|node| node.inputs.iter().copied());
        let results = self.results.iter().filter_map(|result| match result {
            GraphResult::Value { edge, .. } => Some(*edge),
            GraphResult::Error => None,
        });
        inputs.chain(results).collect()
    }

    /// Mark every node whose dependency closure bottoms out only in
    /// externals
    ///
    /// Such a node has at least one input and every input is either an
    /// external or itself hoisted. Returns the number of hoisted nodes.
    pub fn mark_hoisted(&mut self) -> usize {
        let mut count = 0;
        for position in 0..self.order.len() {
            let index = self.order[position];
            let node = &self.nodes[index];
            let hoisted = !node.inputs.is_empty()
                && node.inputs.iter().all(|edge| {
                    let input = &self.nodes[edge.node];
                    input.is_external() || input.hoisted
                });
            if hoisted {
                count += 1;
            }
            self.nodes[index].hoisted = hoisted;
        }
        count
    }

    /// Emission order: hoisted nodes first when `hoist` is set, each group
    /// keeping post-order
    pub fn emission_order(&self, hoist: bool) -> Vec<NodeIndex> {
        if !hoist {
            return self.order.clone();
        }
        let (mut first, rest): (Vec<_>, Vec<_>) = self
            .order
            .iter()
            .copied()
            .partition(|&index| self.nodes[index].hoisted);
        first.extend(rest);
        first
    }

    /// Graphviz rendering of the graph
    pub fn to_dot(&self) -> String {
        let mut output = String::from("digraph Wire {\n");
        output.push_str("  rankdir=LR;\n");
        output.push_str("  node [shape=box, style=rounded];\n\n");

        for (index, node) in self.nodes.iter().enumerate() {
            let color = match &node.declaration {
                Declaration::External(_) => "lightgrey",
                Declaration::Function(_) => "lightblue",
                Declaration::Struct(_) => "lightyellow",
                Declaration::Error => "white",
            };
            let label = node.declaration.to_string().replace('"', "\\\"");
            let _ = writeln!(
                output,
                "  n{index} [label=\"{label}\", fillcolor={color}, style=filled];"
            );
        }

        output.push('\n');

        for (index, node) in self.nodes.iter().enumerate() {
            for edge in &node.inputs {
                let _ = writeln!(output, "  n{} -> n{index};", edge.node);
            }
        }

        output.push_str("}\n");
        output
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &index in &self.params {
            writeln!(f, "param  n{index}: {}", self.nodes[index].declaration)?;
        }
        for &index in &self.order {
            let node = &self.nodes[index];
            let marker = if node.hoisted { "hoist " } else { "build " };
            write!(f, "{marker} n{index}: {}", node.declaration)?;
            if !node.inputs.is_empty() {
                let inputs: Vec<String> = node
                    .inputs
                    .iter()
                    .map(|edge| format!("n{}.{}", edge.node, edge.slot))
                    .collect();
                write!(f, " <- {}", inputs.join(", "))?;
            }
            writeln!(f)?;
        }
        for result in &self.results {
            match result {
                GraphResult::Value { wanted, edge, .. } => {
                    writeln!(f, "result {wanted} <- n{}.{}", edge.node, edge.slot)?;
                }
                GraphResult::Error => writeln!(f, "result error")?,
            }
        }
        Ok(())
    }
}
