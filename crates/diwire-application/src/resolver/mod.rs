//! Graph resolution
//!
//! [`Injector`] drives the wire pass; [`Graph`] is its inspectable result.

mod graph;
mod injector;

pub use graph::{Edge, Graph, GraphResult, Node, NodeIndex};
pub use injector::Injector;
