//! All simple paths from a root to a target.
//!
//! When the target's upstream network is acyclic every walk is a simple
//! path, so the union of paths is the part of that network reachable from
//! the root. This is linear in its size.
//!
//! Otherwise the search is depth-first over an explicit stack. A node is
//! marked "on path" when entered and unmarked when the search backtracks out
//! of it, so a node may appear on several distinct paths (forks, diamonds)
//! while no single path repeats a node. This is exponential in the worst
//! case and only runs when a loop lies upstream of the target.

use std::collections::VecDeque;

use petgraph::algo::is_cyclic_directed;
use tracing::{debug, warn};

use crate::ancestors::sub_network;
use crate::network::{Network, NodeId, NodeSet};

/// One level of the DFS stack.
struct Frame {
    node: NodeId,
    successors: Vec<NodeId>,
    next: usize,
}

/// Union of every simple path from `root` to `target`.
///
/// Returns the nodes of every such path and the edges between consecutive
/// path nodes, in their original direction. Successors that cannot reach
/// `target` are skipped before descent; they lie on no root-to-target path.
///
/// # Degenerate cases
///
/// - `root == target` yields the single node.
/// - If `root` or `target` is not in `network`, or no path exists, the
///   result is an empty network rather than an error.
#[must_use]
pub fn paths_to(network: &Network, root: NodeId, target: NodeId) -> Network {
    let mut found = Network::new();

    if !network.contains(root) || !network.contains(target) {
        warn!(
            root,
            target,
            "root or target is not in the network; returning empty result"
        );
        return found;
    }
    if root == target {
        found.add_node(root);
        return found;
    }

    let upstream = sub_network(network, target);
    if !upstream.contains(root) {
        debug!(root, target, "no path from root to target");
        return found;
    }

    let (graph, _) = upstream.to_digraph();
    if !is_cyclic_directed(&graph) {
        let reachable = reachable_from(&upstream, root);
        debug!(
            root,
            target,
            nodes = reachable.node_count(),
            edges = reachable.edge_count(),
            "collected paths through acyclic upstream"
        );
        return reachable;
    }

    let frame_for = |node: NodeId| Frame {
        node,
        successors: network
            .successors(node)
            .into_iter()
            .flatten()
            .copied()
            .filter(|succ| upstream.contains(*succ))
            .collect(),
        next: 0,
    };

    let mut on_path = NodeSet::from([root]);
    let mut path = vec![root];
    let mut stack = vec![frame_for(root)];
    let mut paths_found = 0usize;

    while let Some(frame) = stack.last_mut() {
        let Some(&succ) = frame.successors.get(frame.next) else {
            // Every branch below this node is done; free it for other paths.
            on_path.remove(&frame.node);
            path.pop();
            stack.pop();
            continue;
        };
        frame.next += 1;

        if on_path.contains(&succ) {
            continue;
        }
        if succ == target {
            record_path(&mut found, &path, target);
            paths_found += 1;
            continue;
        }

        on_path.insert(succ);
        path.push(succ);
        stack.push(frame_for(succ));
    }

    debug!(
        root,
        target,
        paths = paths_found,
        nodes = found.node_count(),
        edges = found.edge_count(),
        "collected paths"
    );
    found
}

/// The part of `upstream` reachable from `root`.
///
/// `upstream` holds only ancestors of the target and has no cycles, so each
/// node reached lies on a root-to-target path and so does each edge walked.
fn reachable_from(upstream: &Network, root: NodeId) -> Network {
    let mut found = Network::new();
    found.add_node(root);

    let mut seen = NodeSet::from([root]);
    let mut queue = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        for &succ in upstream.successors(node).into_iter().flatten() {
            found.add_edge(node, succ);
            if seen.insert(succ) {
                queue.push_back(succ);
            }
        }
    }

    found
}

/// Add `path` followed by `target` to `found` as a chain of edges.
fn record_path(found: &mut Network, path: &[NodeId], target: NodeId) {
    let mut prev = None;
    for &node in path.iter().chain(std::iter::once(&target)) {
        if let Some(from) = prev {
            found.add_edge(from, node);
        }
        prev = Some(node);
    }
}
