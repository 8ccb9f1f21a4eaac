//! The game controller: owns the current graph and configuration and turns
//! user actions into generation and money moves.
//!
//! The controller knows nothing about windows or events; the viewer calls
//! [`Game::on_node_count_changed`], [`Game::on_max_neighbors_changed`],
//! [`Game::generate`] and [`Game::on_node_activated`] directly.

use crate::{
    config::{Config, clamp_max_neighbors, clamp_node_count},
    error::GameError,
    graph::Graph,
    phases,
    types::NodeId,
};
use rand::Rng;

/// Summary of one generation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationReport {
    pub requested: usize,
    pub placed: usize,
    pub mst_edges: usize,
    pub extra_edges: usize,
}

#[derive(Debug, Default)]
pub struct Game {
    pub cfg: Config,
    graph: Graph,
}

impl Game {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            graph: Graph::new(),
        }
    }

    /// Read access for rendering. The graph is only mutated through the
    /// controller.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Discards the current graph and builds a new one.
    ///
    /// Runs every phase in [`phases`] in order. Nodes that could not be
    /// placed are reported in the summary but are not an error.
    pub fn generate(&mut self, rng: &mut impl Rng) -> GenerationReport {
        phases::reset_phase(&mut self.graph);
        let placed = phases::placement_phase(&mut self.graph, &self.cfg, rng);
        let pairs = phases::pair_phase(&self.graph);
        let mst_edges = phases::mst_phase(&mut self.graph, &pairs);
        let extra_edges = phases::extra_edge_phase(&mut self.graph, &pairs, &self.cfg);
        phases::seeding_phase(&mut self.graph, rng);

        let report = GenerationReport {
            requested: self.cfg.node_count,
            placed,
            mst_edges,
            extra_edges,
        };
        if placed < report.requested {
            tracing::info!(
                requested = report.requested,
                placed,
                "could not place every node, generated a smaller graph"
            );
        }
        tracing::info!(
            nodes = placed,
            edges = mst_edges + extra_edges,
            extra_edges,
            "generated graph"
        );
        report
    }

    /// Applies a new requested node count and returns the clamped value.
    ///
    /// `None` means the input was not a number. The graph is not rebuilt
    /// until the next [`Game::generate`].
    pub fn on_node_count_changed(&mut self, value: Option<i64>) -> usize {
        self.cfg.node_count = clamp_node_count(value);
        self.cfg.node_count
    }

    /// Applies a new neighbor limit and returns the clamped value.
    pub fn on_max_neighbors_changed(&mut self, value: Option<i64>) -> usize {
        self.cfg.max_neighbors = clamp_max_neighbors(value);
        self.cfg.max_neighbors
    }

    /// Fires node `id`: each neighbor gains one unit, `id` pays for all.
    pub fn on_node_activated(&mut self, id: NodeId) -> Result<(), GameError> {
        self.graph.redistribute(id)?;
        tracing::debug!(id, money = self.graph.nodes[id].money, "node activated");
        Ok(())
    }
}
