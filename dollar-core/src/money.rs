//! Balances and the chip-firing move.
//!
//! Money is only ever moved between neighbors, so the total over all
//! nodes never changes after seeding. Balances have no lower bound.

use crate::{error::GameError, graph::Graph, graph::Node, types::NodeId};

/// Display state derived from the sign of a balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Sad,
}

impl Node {
    pub fn mood(&self) -> Mood {
        if self.money < 0 { Mood::Sad } else { Mood::Happy }
    }
}

impl Graph {
    pub fn add_money(&mut self, id: NodeId, amount: i64) -> Result<(), GameError> {
        let node = self.nodes.get_mut(id).ok_or(GameError::UnknownNode(id))?;
        node.money += amount;
        Ok(())
    }

    /// Gives one unit to every neighbor of `id` and debits `id` by its degree.
    pub fn redistribute(&mut self, id: NodeId) -> Result<(), GameError> {
        if id >= self.nodes.len() {
            return Err(GameError::UnknownNode(id));
        }
        self.fire(id);
        Ok(())
    }

    /// Chip-firing move for an id already known to be in the graph.
    pub(crate) fn fire(&mut self, id: NodeId) {
        let neighbors = self.nodes[id].neighbors.clone();
        for &n in &neighbors {
            self.nodes[n].money += 1;
        }
        self.nodes[id].money -= neighbors.len() as i64;
    }

    /// Number of nodes currently in debt.
    pub fn sad_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.mood() == Mood::Sad).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn star() -> Graph {
        // Center 0 with three leaves.
        let mut g = Graph::new();
        g.add_node(Vec2::new(50.0, 50.0));
        g.add_node(Vec2::new(20.0, 50.0));
        g.add_node(Vec2::new(80.0, 50.0));
        g.add_node(Vec2::new(50.0, 80.0));
        for leaf in 1..=3 {
            g.add_edge(0, leaf);
        }
        g
    }

    #[test]
    fn redistribute_moves_one_unit_per_neighbor() {
        let mut g = star();
        g.redistribute(0).unwrap();
        assert_eq!(g.nodes[0].money, -3);
        assert!(g.nodes[1..].iter().all(|n| n.money == 1));
        assert_eq!(g.total_money(), 0);

        g.redistribute(2).unwrap();
        assert_eq!(g.nodes[0].money, -2);
        assert_eq!(g.nodes[2].money, 0);
    }

    #[test]
    fn mood_follows_sign_of_balance() {
        let mut g = star();
        assert_eq!(g.nodes[0].mood(), Mood::Happy);
        g.add_money(0, -1).unwrap();
        assert_eq!(g.nodes[0].mood(), Mood::Sad);
        assert_eq!(g.sad_count(), 1);
        g.add_money(0, 1).unwrap();
        assert_eq!(g.nodes[0].mood(), Mood::Happy);
        assert_eq!(g.sad_count(), 0);
    }

    #[test]
    fn debt_is_unbounded() {
        let mut g = star();
        for _ in 0..10 {
            g.redistribute(0).unwrap();
        }
        assert_eq!(g.nodes[0].money, -30);
        assert_eq!(g.total_money(), 0);
    }

    #[test]
    fn isolated_node_redistribution_is_a_no_op() {
        let mut g = Graph::new();
        g.add_node(Vec2::new(50.0, 50.0));
        g.redistribute(0).unwrap();
        assert_eq!(g.nodes[0].money, 0);
    }

    #[test]
    fn unknown_node_is_reported() {
        let mut g = star();
        assert_eq!(g.redistribute(4), Err(GameError::UnknownNode(4)));
        assert_eq!(g.add_money(99, 1), Err(GameError::UnknownNode(99)));
        assert_eq!(g.total_money(), 0);
    }
}
