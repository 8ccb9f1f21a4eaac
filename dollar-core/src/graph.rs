use crate::types::{EdgeId, NodeId};
use glam::Vec2;

#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// Position in percentage coordinates.
    pub pos: Vec2,
    /// Balance; negative means the node is in debt.
    pub money: i64,
    pub neighbors: Vec<NodeId>,
    /// Edge handles, parallel to `neighbors`.
    pub edges: Vec<EdgeId>,
}

/// An undirected edge between two distinct nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

/// Nodes and edges of one generation cycle.
///
/// The graph owns everything; nodes refer to neighbors and edges by id.
/// [`Graph::reset`] discards the whole cycle and restarts id assignment.
#[derive(Debug, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    next_id: NodeId,
}

impl Node {
    pub fn new(id: NodeId, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            money: 0,
            neighbors: Vec::with_capacity(4),
            edges: Vec::with_capacity(4),
        }
    }

    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn has_neighbor(&self, other: NodeId) -> bool {
        self.neighbors.contains(&other)
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.next_id = 0;
    }

    pub fn add_node(&mut self, pos: Vec2) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.push(Node::new(id, pos));
        id
    }

    /// Connects `a` and `b`, recording the edge on both endpoints.
    ///
    /// Returns `None` without touching the graph for self-loops, unknown
    /// ids, or a pair that is already connected.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Option<EdgeId> {
        if a == b || a >= self.nodes.len() || b >= self.nodes.len() || self.nodes[a].has_neighbor(b)
        {
            return None;
        }
        let id = self.edges.len();
        self.edges.push(Edge { a, b });
        self.nodes[a].neighbors.push(b);
        self.nodes[a].edges.push(id);
        self.nodes[b].neighbors.push(a);
        self.nodes[b].edges.push(id);
        Some(id)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn positions(&self) -> Vec<Vec2> {
        self.nodes.iter().map(|n| n.pos).collect()
    }

    /// Endpoint positions of every edge, in edge order.
    pub fn edge_segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.edges
            .iter()
            .map(|e| (self.nodes[e.a].pos, self.nodes[e.b].pos))
    }

    /// Edge ids touching `id`; empty for unknown ids.
    pub fn incident_edges(&self, id: NodeId) -> &[EdgeId] {
        match self.nodes.get(id) {
            Some(n) => &n.edges,
            None => &[],
        }
    }

    pub fn total_money(&self) -> i64 {
        self.nodes.iter().map(|n| n.money).sum()
    }

    /// Whether every node can reach every other node. An empty graph counts
    /// as connected.
    pub fn is_connected(&self) -> bool {
        let Some(first) = self.nodes.first() else {
            return true;
        };
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![first.id];
        seen[first.id] = true;
        let mut reached = 1;
        while let Some(id) = stack.pop() {
            for &n in &self.nodes[id].neighbors {
                if !seen[n] {
                    seen[n] = true;
                    reached += 1;
                    stack.push(n);
                }
            }
        }
        reached == self.nodes.len()
    }

    /// Nearest node within `radius` of `pos`, if any.
    pub fn node_at(&self, pos: Vec2, radius: f32) -> Option<NodeId> {
        let r2 = radius * radius;
        self.nodes
            .iter()
            .map(|n| (n.id, (n.pos - pos).length_squared()))
            .filter(|&(_, d2)| d2 <= r2)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}
