//! citegraph-graph: In-memory citation graph.
//!
//! Publications are nodes; an edge `parent → child` means the child cites the
//! parent. Every node hangs off a permanent root. Removing a node removes every
//! descendant that loses its last path to the root, and multi-parent inserts
//! are all-or-nothing.

pub mod error;
pub mod graph;
mod index;
mod node;

pub use error::GraphError;
pub use graph::CitationGraph;
