//! Tunable parameters for graph generation.
//!
//! Raw input from the outside world (text fields, CLI flags) goes through
//! [`clamp_node_count`] / [`clamp_max_neighbors`], which never reject a
//! value: out-of-range numbers snap to the nearest bound and missing or
//! non-numeric input falls back to the lower bound.

/// Minimum spacing between placed nodes, in percentage units.
pub const MIN_DIST: f32 = 10.0;

/// Cosine above which a candidate extra edge is considered too close in
/// direction to an existing edge at the same node.
pub const MAX_EDGE_DOT_PRODUCT: f32 = 0.95;

pub const MIN_NODE_COUNT: usize = 3;
pub const MAX_NODE_COUNT: usize = 50;
pub const MIN_MAX_NEIGHBORS: usize = 2;

/// Samples tried per node before placement gives up on it.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Requested number of nodes; the placed count may end up lower.
    pub node_count: usize,
    /// Upper bound on the degree of a node when adding extra edges.
    pub max_neighbors: usize,
    pub min_dist: f32,
    pub max_edge_dot_product: f32,
    pub max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_count: 5,
            max_neighbors: 5,
            min_dist: MIN_DIST,
            max_edge_dot_product: MAX_EDGE_DOT_PRODUCT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Clamps a requested node count into `[MIN_NODE_COUNT, MAX_NODE_COUNT]`.
///
/// `None` stands for input that was not a number and resets to the minimum.
pub fn clamp_node_count(value: Option<i64>) -> usize {
    match value {
        Some(v) if v >= MIN_NODE_COUNT as i64 => v.min(MAX_NODE_COUNT as i64) as usize,
        _ => MIN_NODE_COUNT,
    }
}

/// Clamps a requested neighbor limit to at least [`MIN_MAX_NEIGHBORS`].
///
/// There is no upper bound; a limit above the node count simply never binds.
pub fn clamp_max_neighbors(value: Option<i64>) -> usize {
    match value {
        Some(v) if v >= MIN_MAX_NEIGHBORS as i64 => usize::try_from(v).unwrap_or(usize::MAX),
        _ => MIN_MAX_NEIGHBORS,
    }
}

/// Parses a count typed by the user. Surrounding whitespace is ignored;
/// anything else that is not an integer yields `None`.
pub fn parse_count(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}
