//! Node grouping by relabel scan.
//!
//! A deliberately simple union-find: every node carries an integer label and
//! two nodes are connected iff their labels match. Merging rewrites every
//! occurrence of the larger label to the smaller one, a full O(W·H) scan.
//! There is no path compression; puzzle grids are small and the lower label
//! always survives, which keeps replays deterministic.

use std::collections::HashSet;

use crate::grid::{GridTopology, Node};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    topology: GridTopology,
    /// Labels in row-major slot order.
    labels: Vec<u32>,
}

impl Grouping {
    /// Every node in its own group, labelled row-major from 1.
    pub fn fresh(topology: GridTopology) -> Self {
        let labels = (1..=topology.node_count() as u32).collect();
        Self { topology, labels }
    }

    /// Build from precomputed row-major labels.
    pub fn from_labels(topology: GridTopology, labels: Vec<u32>) -> Self {
        debug_assert_eq!(labels.len(), topology.node_count());
        Self { topology, labels }
    }

    #[inline]
    pub fn label(&self, node: Node) -> u32 {
        self.labels[self.topology.index(node)]
    }

    #[inline]
    pub fn same(&self, a: Node, b: Node) -> bool {
        self.label(a) == self.label(b)
    }

    /// Join the groups of `a` and `b`, keeping the lower label.
    ///
    /// Returns `false` if they were already in the same group.
    pub fn merge(&mut self, a: Node, b: Node) -> bool {
        let (la, lb) = (self.label(a), self.label(b));
        if la == lb {
            return false;
        }
        let (lo, hi) = if la < lb { (la, lb) } else { (lb, la) };
        for label in self.labels.iter_mut() {
            if *label == hi {
                *label = lo;
            }
        }
        true
    }

    /// Number of distinct groups.
    pub fn group_count(&self) -> usize {
        self.labels.iter().collect::<HashSet<_>>().len()
    }

    /// Labels in row-major slot order.
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridTopology {
        GridTopology::new(3, 2).unwrap()
    }

    #[test]
    fn test_fresh_labels_are_row_major() {
        let grouping = Grouping::fresh(grid());
        assert_eq!(grouping.labels(), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(grouping.group_count(), 6);
    }

    #[test]
    fn test_merge_keeps_lower_label() {
        let mut grouping = Grouping::fresh(grid());
        assert!(grouping.merge(Node::new(2, 1), Node::new(1, 1)));
        assert_eq!(grouping.label(Node::new(2, 1)), 5);
        assert_eq!(grouping.label(Node::new(1, 1)), 5);

        assert!(grouping.merge(Node::new(1, 1), Node::new(1, 0)));
        // Both members of the old group 5 now carry 2.
        assert_eq!(grouping.label(Node::new(2, 1)), 2);
        assert_eq!(grouping.label(Node::new(1, 0)), 2);
        assert_eq!(grouping.group_count(), 4);
    }

    #[test]
    fn test_merge_same_group_is_noop() {
        let mut grouping = Grouping::fresh(grid());
        grouping.merge(Node::new(0, 0), Node::new(1, 0));
        let before = grouping.clone();
        assert!(!grouping.merge(Node::new(1, 0), Node::new(0, 0)));
        assert_eq!(grouping, before);
        assert!(grouping.same(Node::new(0, 0), Node::new(1, 0)));
        assert!(!grouping.same(Node::new(0, 0), Node::new(2, 0)));
    }

    #[test]
    fn test_merge_order_does_not_change_partition() {
        let pairs = [
            (Node::new(0, 0), Node::new(1, 0)),
            (Node::new(2, 0), Node::new(2, 1)),
            (Node::new(1, 0), Node::new(1, 1)),
        ];
        let mut forward = Grouping::fresh(grid());
        for (a, b) in pairs {
            forward.merge(a, b);
        }
        let mut backward = Grouping::fresh(grid());
        for (a, b) in pairs.iter().rev() {
            backward.merge(*a, *b);
        }
        assert_eq!(forward, backward);
    }
}
