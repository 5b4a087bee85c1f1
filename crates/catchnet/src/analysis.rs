//! Whole-network checks built on petgraph.
//!
//! - Cycle detection (Tarjan's SCC algorithm), with a concrete loop traced
//!   through each cyclic component
//! - Summary statistics: sizes, headwaters (sources) and outlets (sinks)
//!
//! Catchment networks are expected to be acyclic; a cycle usually points at
//! a data problem in the navigation table.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet, VecDeque};

use petgraph::algo;

use crate::network::{Network, NodeId};

/// Find every cycle in the network.
///
/// Returns one entry per strongly connected component that contains a cycle:
/// components of two or more nodes, and single nodes with a self-loop.
/// Members are sorted within each entry, and entries are sorted.
#[must_use]
pub fn find_cycles(network: &Network) -> Vec<Vec<NodeId>> {
    let (graph, _) = network.to_digraph();

    let mut cycles: Vec<Vec<NodeId>> = algo::tarjan_scc(&graph)
        .into_iter()
        .filter(|component| match component.as_slice() {
            [single] => graph.contains_edge(*single, *single),
            _ => true,
        })
        .map(|component| {
            let mut members: Vec<NodeId> = component.into_iter().map(|ix| graph[ix]).collect();
            members.sort_unstable();
            members
        })
        .collect();

    cycles.sort();
    cycles
}

/// A shortest cycle through the smallest node of `component`.
///
/// `component` is one entry of [`find_cycles`]. Members in sorted order need
/// not be joined by edges, so this walks the network itself. The returned
/// nodes follow edge order from the smallest member, and the last one has an
/// edge back to the first. A self-loop gives a single node. The result is
/// empty if `component` contains no cycle.
#[must_use]
pub fn trace_cycle(network: &Network, component: &[NodeId]) -> Vec<NodeId> {
    let Some(&start) = component.iter().min() else {
        return Vec::new();
    };
    let inside: HashSet<NodeId> = component.iter().copied().collect();

    // Breadth-first from `start`; the first edge back to it closes a
    // shortest cycle.
    let mut parent: HashMap<NodeId, NodeId> = HashMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        let mut succs: Vec<NodeId> = network
            .successors(node)
            .into_iter()
            .flatten()
            .copied()
            .filter(|succ| inside.contains(succ))
            .collect();
        succs.sort_unstable();

        for succ in succs {
            if succ == start {
                let mut cycle = vec![node];
                let mut at = node;
                while let Some(&prev) = parent.get(&at) {
                    cycle.push(prev);
                    at = prev;
                }
                cycle.reverse();
                return cycle;
            }
            if let Entry::Vacant(slot) = parent.entry(succ) {
                slot.insert(node);
                queue.push_back(succ);
            }
        }
    }

    Vec::new()
}

/// Summary statistics for a network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkStats {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of distinct edges.
    pub edge_count: usize,
    /// Nodes with no predecessors, ascending.
    pub sources: Vec<NodeId>,
    /// Nodes with no successors, ascending.
    pub sinks: Vec<NodeId>,
    /// Number of `(x, x)` edges.
    pub self_loops: usize,
}

impl NetworkStats {
    /// Compute statistics for `network`.
    #[must_use]
    pub fn of(network: &Network) -> Self {
        let has_predecessor: HashSet<NodeId> = network.edges().map(|(_, to)| to).collect();

        let sources = network
            .sorted_nodes()
            .into_iter()
            .filter(|node| !has_predecessor.contains(node))
            .collect();
        let sinks = network
            .sorted_nodes()
            .into_iter()
            .filter(|&node| network.successors(node).is_none_or(HashSet::is_empty))
            .collect();
        let self_loops = network.edges().filter(|(from, to)| from == to).count();

        Self {
            node_count: network.node_count(),
            edge_count: network.edge_count(),
            sources,
            sinks,
            self_loops,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(edges: &[(NodeId, NodeId)]) -> Network {
        edges.iter().copied().collect()
    }

    #[test]
    fn acyclic_network_has_no_cycles() {
        let g = network(&[(0, 1), (1, 2), (0, 2)]);

        assert!(find_cycles(&g).is_empty());
    }

    #[test]
    fn finds_each_cycle_sorted() {
        let g = network(&[(0, 1), (1, 2), (2, 1), (5, 6), (6, 7), (7, 5), (9, 9)]);

        let cycles = find_cycles(&g);

        assert_eq!(cycles, vec![vec![1, 2], vec![5, 6, 7], vec![9]]);
    }

    #[test]
    fn traced_cycle_follows_edges_not_id_order() {
        // Sorted members 1, 2, 3 would suggest 1 → 2, which is not an edge.
        let g = network(&[(1, 3), (3, 2), (2, 1), (0, 1)]);

        let cycles = find_cycles(&g);
        assert_eq!(cycles, vec![vec![1, 2, 3]]);

        assert_eq!(trace_cycle(&g, &cycles[0]), vec![1, 3, 2]);
    }

    #[test]
    fn traced_cycle_is_shortest_through_smallest_member() {
        // Component {4, 5, 6, 7}: 4 → 5 → 7 → 4 and 4 → 6 → 7 → 4.
        let g = network(&[(4, 5), (4, 6), (5, 7), (6, 7), (7, 4), (7, 8)]);

        let cycles = find_cycles(&g);
        assert_eq!(cycles, vec![vec![4, 5, 6, 7]]);

        let cycle = trace_cycle(&g, &cycles[0]);
        assert_eq!(cycle, vec![4, 5, 7]);
        for pair in cycle.windows(2) {
            assert!(g.has_edge(pair[0], pair[1]));
        }
        assert!(g.has_edge(7, 4), "last node closes the loop");
    }

    #[test]
    fn traced_self_loop_is_single_node() {
        let g = network(&[(0, 9), (9, 9)]);

        assert_eq!(trace_cycle(&g, &[9]), vec![9]);
    }

    #[test]
    fn acyclic_component_traces_nothing() {
        let g = network(&[(0, 1)]);

        assert!(trace_cycle(&g, &[0, 1]).is_empty());
        assert!(trace_cycle(&g, &[]).is_empty());
    }

    #[test]
    fn stats_report_sources_and_sinks() {
        let g = network(&[(0, 1), (0, 2), (1, 3), (2, 3), (4, 4)]);

        let stats = NetworkStats::of(&g);

        assert_eq!(stats.node_count, 5);
        assert_eq!(stats.edge_count, 5);
        assert_eq!(stats.sources, vec![0]);
        assert_eq!(stats.sinks, vec![3]);
        assert_eq!(stats.self_loops, 1);
    }

    #[test]
    fn stats_of_empty_network() {
        assert_eq!(NetworkStats::of(&Network::new()), NetworkStats::default());
    }
}
