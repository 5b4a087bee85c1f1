//! Ancestor subgraph extraction.
//!
//! Answers "what drains into this catchment?": the subgraph made of a target
//! node and every node with a directed path to it, edges kept in their
//! original direction.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::network::{Network, NodeId, NodeSet};

/// Subgraph of `target` and every node upstream of it.
///
/// Walks the transposed network breadth-first from `target`. Every reverse
/// edge leaving an expanded node is recorded, so an edge `(u, v)` is kept
/// exactly when `v` is `target` or one of its ancestors. The recorded edges
/// are transposed back before returning.
///
/// Each node is expanded at most once, so cycles upstream of the target
/// terminate and are included in full.
///
/// # Missing target
///
/// If `target` is not in `network` the result is an empty network, not an
/// error. A target with no predecessors yields a network holding only the
/// target.
#[must_use]
pub fn sub_network(network: &Network, target: NodeId) -> Network {
    if !network.contains(target) {
        warn!(
            target,
            "target is not in the network; returning empty sub-network"
        );
        return Network::new();
    }

    let reverse = network.transpose();

    let mut upstream = Network::new();
    upstream.add_node(target);

    let mut seen = NodeSet::new();
    let mut queue = VecDeque::from([target]);

    while let Some(node) = queue.pop_front() {
        if !seen.insert(node) {
            continue;
        }
        let Some(preds) = reverse.successors(node) else {
            continue;
        };
        for &pred in preds {
            upstream.add_edge(node, pred);
            if !seen.contains(&pred) {
                queue.push_back(pred);
            }
        }
    }

    let sub = upstream.transpose();
    debug!(
        target,
        nodes = sub.node_count(),
        edges = sub.edge_count(),
        "extracted ancestor sub-network"
    );
    sub
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(edges: &[(NodeId, NodeId)]) -> Network {
        edges.iter().copied().collect()
    }

    #[test]
    fn chain_keeps_only_upstream_nodes() {
        let g = network(&[(0, 1), (1, 2), (2, 3), (2, 4)]);

        let sub = sub_network(&g, 3);

        assert_eq!(sub.sorted_edges(), vec![(0, 1), (1, 2), (2, 3)]);
        assert!(!sub.contains(4), "downstream sibling must be excluded");
    }

    #[test]
    fn cycle_through_target_is_included_once() {
        let g = network(&[(0, 1), (1, 2), (2, 1)]);

        let sub = sub_network(&g, 1);

        assert_eq!(sub.sorted_nodes(), vec![0, 1, 2]);
        assert_eq!(sub.sorted_edges(), vec![(0, 1), (1, 2), (2, 1)]);
    }

    #[test]
    fn headwater_target_yields_single_node() {
        let g = network(&[(0, 1), (1, 2)]);

        let sub = sub_network(&g, 0);

        assert_eq!(sub.sorted_nodes(), vec![0]);
        assert_eq!(sub.edge_count(), 0);
    }

    // Tolerant policy: an unknown target is not reported as an error.
    #[test]
    fn missing_target_yields_empty_network() {
        let g = network(&[(0, 1)]);

        let sub = sub_network(&g, 99);

        assert!(sub.is_empty());
    }

    #[test]
    fn self_loop_on_target_is_kept() {
        let g = network(&[(0, 1), (1, 1)]);

        let sub = sub_network(&g, 1);

        assert_eq!(sub.sorted_edges(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn result_is_independent_of_input() {
        let g = network(&[(0, 1), (1, 2)]);
        let mut sub = sub_network(&g, 2);

        sub.add_edge(2, 100);

        assert!(!g.contains(100));
    }
}
