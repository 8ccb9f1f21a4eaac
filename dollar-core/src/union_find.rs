use crate::types::NodeId;
use std::collections::HashMap;

/// Disjoint sets over node ids, used while selecting spanning tree edges.
///
/// Ids that were never merged have no recorded parent and are their own
/// root. There is no path compression or union by rank; the sets built
/// during generation hold at most a few dozen ids.
#[derive(Debug, Default)]
pub struct UnionFind {
    parent: HashMap<NodeId, NodeId>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follows parent links from `id` until reaching a self-rooted id.
    pub fn find(&self, id: NodeId) -> NodeId {
        let mut cur = id;
        while let Some(&p) = self.parent.get(&cur) {
            cur = p;
        }
        cur
    }

    /// Makes the root of `b`'s set the parent of the root of `a`'s set.
    pub fn union(&mut self, a: NodeId, b: NodeId) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent.insert(ra, rb);
        }
    }

    #[inline]
    pub fn connected(&self, a: NodeId, b: NodeId) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_their_own_roots() {
        let uf = UnionFind::new();
        assert_eq!(uf.find(0), 0);
        assert_eq!(uf.find(17), 17);
        assert!(!uf.connected(0, 1));
        assert!(uf.connected(3, 3));
    }

    #[test]
    fn union_roots_a_under_b() {
        let mut uf = UnionFind::new();
        uf.union(0, 1);
        assert_eq!(uf.find(0), 1);
        assert!(uf.connected(0, 1));

        uf.union(2, 0);
        assert_eq!(uf.find(2), 1);
        assert!(uf.connected(2, 1));
        assert!(!uf.connected(2, 3));
    }

    #[test]
    fn union_of_connected_ids_does_not_create_cycle() {
        let mut uf = UnionFind::new();
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(0, 2);
        // find must still terminate for every member.
        assert_eq!(uf.find(0), uf.find(2));
        assert_eq!(uf.find(1), 2);
    }
}
