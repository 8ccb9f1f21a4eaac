//! Generation phases for a dollar-game graph.
//!
//! A full generation cycle runs, in order:
//! 1. [`reset_phase`] — drop the previous graph and restart ids at 0.
//! 2. [`placement_phase`] — place up to `cfg.node_count` nodes with
//!    minimum spacing; nodes that cannot be placed are skipped.
//! 3. [`pair_phase`] — list every unordered node pair, sorted by distance.
//! 4. [`mst_phase`] — connect the nodes with a minimum spanning tree.
//! 5. [`extra_edge_phase`] — add short extra edges that respect the
//!    neighbor limit and do not run alongside an existing edge.
//! 6. [`seeding_phase`] — fire random nodes so balances start out mixed.

use crate::{
    config::Config,
    geometry::{distance, normalized_dot},
    graph::Graph,
    placement::place_point,
    types::NodeId,
    union_find::UnionFind,
};
use rand::Rng;

/// A candidate edge considered during generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pair {
    pub a: NodeId,
    pub b: NodeId,
    pub dist: f32,
}

/// Why the extra-edge pass skipped a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The given endpoint is not a node of the graph.
    UnknownNode(NodeId),
    /// The given endpoint is already at the neighbor limit.
    TooManyNeighbors(NodeId),
    AlreadyNeighbors,
    /// The edge would leave `at` almost parallel to its edge towards `other`.
    TooSharp { at: NodeId, other: NodeId },
}

pub fn reset_phase(graph: &mut Graph) {
    graph.reset();
}

/// Places up to `cfg.node_count` nodes one after another.
///
/// Each node goes through [`place_point`] against all nodes placed so far.
/// A node whose placement is exhausted is dropped, so the graph can end up
/// with fewer nodes than requested.
///
/// ### Returns
/// The number of nodes actually placed.
pub fn placement_phase(graph: &mut Graph, cfg: &Config, rng: &mut impl Rng) -> usize {
    let mut positions = graph.positions();
    let mut placed = 0;
    for _ in 0..cfg.node_count {
        if let Some(pos) = place_point(&positions, cfg.min_dist, cfg.max_attempts, rng) {
            graph.add_node(pos);
            positions.push(pos);
            placed += 1;
        }
    }
    tracing::debug!(requested = cfg.node_count, placed, "placement phase done");
    placed
}

/// Enumerates every unordered pair of nodes, shortest first.
///
/// Pairs are produced row-major in id order (`(0,1), (0,2), .., (1,2), ..`)
/// and then stably sorted, so exact distance ties keep that order.
pub fn pair_phase(graph: &Graph) -> Vec<Pair> {
    let n = graph.nodes.len();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, a) in graph.nodes.iter().enumerate() {
        for b in &graph.nodes[i + 1..] {
            pairs.push(Pair {
                a: a.id,
                b: b.id,
                dist: distance(a.pos, b.pos),
            });
        }
    }
    pairs.sort_by(|p, q| p.dist.total_cmp(&q.dist));
    pairs
}

/// Builds a minimum spanning tree from the sorted pair list.
///
/// Pairs are taken in order; a pair whose endpoints are not yet connected
/// according to a [`UnionFind`] becomes an edge. The scan stops as soon as
/// `nodes - 1` edges exist, leaving the rest of the list unvisited.
///
/// ### Returns
/// The number of edges added.
pub fn mst_phase(graph: &mut Graph, pairs: &[Pair]) -> usize {
    let target = graph.nodes.len().saturating_sub(1);
    let mut sets = UnionFind::new();
    let mut added = 0;

    for p in pairs {
        if added == target {
            break;
        }
        if sets.connected(p.a, p.b) {
            continue;
        }
        sets.union(p.a, p.b);
        if graph.add_edge(p.a, p.b).is_some() {
            added += 1;
        }
    }
    tracing::debug!(edges = added, "spanning tree phase done");
    added
}

/// Checks whether the edge `a — b` may be added on top of the current graph.
///
/// The checks run in order: neighbor limit on `a`, then on `b`, then
/// whether the two are already neighbors, then the angle test from `a`
/// against each of its neighbors and finally from `b`. Ids outside the
/// graph are rejected before anything else.
pub fn check_extra_edge(graph: &Graph, a: NodeId, b: NodeId, cfg: &Config) -> Result<(), Rejection> {
    let na = graph.node(a).ok_or(Rejection::UnknownNode(a))?;
    let nb = graph.node(b).ok_or(Rejection::UnknownNode(b))?;

    if na.neighbor_count() >= cfg.max_neighbors {
        return Err(Rejection::TooManyNeighbors(a));
    }
    if nb.neighbor_count() >= cfg.max_neighbors {
        return Err(Rejection::TooManyNeighbors(b));
    }
    if na.has_neighbor(b) {
        return Err(Rejection::AlreadyNeighbors);
    }

    for (at, to) in [(na, nb), (nb, na)] {
        for &other in &at.neighbors {
            let dot = normalized_dot(to.pos, at.pos, graph.nodes[other].pos);
            if dot > cfg.max_edge_dot_product {
                return Err(Rejection::TooSharp { at: at.id, other });
            }
        }
    }
    Ok(())
}

/// Adds extra edges from the shorter half of the pair list.
///
/// The first `ceil(pairs.len() / 2)` pairs are revisited, including the
/// ones already used by the spanning tree (those are skipped as
/// [`Rejection::AlreadyNeighbors`]). Every pair that passes
/// [`check_extra_edge`] becomes an edge immediately, so later pairs see
/// the updated degrees and directions.
///
/// ### Returns
/// The number of edges added.
pub fn extra_edge_phase(graph: &mut Graph, pairs: &[Pair], cfg: &Config) -> usize {
    let budget = pairs.len().div_ceil(2);
    let mut added = 0;

    for p in &pairs[..budget] {
        match check_extra_edge(graph, p.a, p.b, cfg) {
            Ok(()) => {
                if graph.add_edge(p.a, p.b).is_some() {
                    added += 1;
                }
            }
            Err(reason) => {
                tracing::trace!(a = p.a, b = p.b, ?reason, "extra edge rejected");
            }
        }
    }
    tracing::debug!(considered = budget, edges = added, "extra edge phase done");
    added
}

/// Fires `2 * nodes` uniformly chosen nodes so the game does not start
/// from all-zero balances.
pub fn seeding_phase(graph: &mut Graph, rng: &mut impl Rng) {
    let n = graph.nodes.len();
    if n == 0 {
        return;
    }
    for _ in 0..n * 2 {
        graph.fire(rng.random_range(0..n));
    }
}
