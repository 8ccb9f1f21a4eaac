/// Identifier for a node in a [`crate::graph::Graph`].
///
/// This is an index into `Graph::nodes`, assigned in placement order
/// starting from 0, and is only meaningful within one generation cycle.
pub type NodeId = usize;

/// Identifier for an edge, an index into `Graph::edges`.
pub type EdgeId = usize;
