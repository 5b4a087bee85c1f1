//! Adjacency-map representation of a catchment network.
//!
//! A [`Network`] maps every node to the set of nodes it flows directly into.
//! An edge `(u, v)` means "u precedes v". Every endpoint of every edge has an
//! entry, so nodes without successors (outlets) still appear.
//!
//! Iteration order over nodes and successors is unspecified. Anything that
//! needs a stable order (rendering, analysis reports) sorts explicitly.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};

/// Identifier of a node (catchment segment / COMID).
pub type NodeId = i64;

/// Unordered set of node identifiers.
pub type NodeSet = HashSet<NodeId>;

/// A directed edge `(from, to)`.
pub type Edge = (NodeId, NodeId);

/// Directed network stored as node → direct successors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    adjacency: HashMap<NodeId, NodeSet>,
}

impl Network {
    /// Create an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `id` is present and return its successor set.
    ///
    /// Adding a node that already exists leaves it untouched.
    pub fn add_node(&mut self, id: NodeId) -> &NodeSet {
        self.adjacency.entry(id).or_default()
    }

    /// Add `from → to` for every `to` in `tos`, creating any missing nodes.
    pub fn add_edges<I>(&mut self, from: NodeId, tos: I)
    where
        I: IntoIterator<Item = NodeId>,
    {
        self.add_node(from);
        for to in tos {
            self.add_node(to);
            self.adjacency.entry(from).or_default().insert(to);
        }
    }

    /// Add a single edge `from → to`.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.add_edges(from, [to]);
    }

    /// Returns `true` if `id` is a node of this network.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Direct successors of `id`, or `None` if the node is absent.
    #[must_use]
    pub fn successors(&self, id: NodeId) -> Option<&NodeSet> {
        self.adjacency.get(&id)
    }

    /// Returns `true` if the edge `from → to` exists.
    #[must_use]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|succs| succs.contains(&to))
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// Returns `true` if the network has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over `(node, successors)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeSet)> {
        self.adjacency.iter().map(|(&node, succs)| (node, succs))
    }

    /// Iterate over node ids in unspecified order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterate over every edge in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(&from, succs)| succs.iter().map(move |&to| (from, to)))
    }

    /// Node ids in ascending order.
    #[must_use]
    pub fn sorted_nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<_> = self.nodes().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Edges in ascending `(from, to)` order.
    #[must_use]
    pub fn sorted_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<_> = self.edges().collect();
        edges.sort_unstable();
        edges
    }

    /// Build the reverse-edge network.
    ///
    /// Every edge `(u, v)` becomes `(v, u)`. Nodes without successors are
    /// carried over, so the node set is unchanged.
    #[must_use]
    pub fn transpose(&self) -> Network {
        let mut reversed = Network::new();
        for (node, succs) in self.iter() {
            reversed.add_node(node);
            for &succ in succs {
                reversed.add_edge(succ, node);
            }
        }
        reversed
    }

    /// Subgraph of `target` and everything upstream of it.
    ///
    /// See [`crate::ancestors::sub_network`].
    #[must_use]
    pub fn sub_network(&self, target: NodeId) -> Network {
        crate::ancestors::sub_network(self, target)
    }

    /// Union of every simple path from `root` to `target`.
    ///
    /// See [`crate::paths::paths_to`].
    #[must_use]
    pub fn paths_to(&self, root: NodeId, target: NodeId) -> Network {
        crate::paths::paths_to(self, root, target)
    }

    /// Convert to a petgraph `DiGraph` for use with its algorithms.
    ///
    /// Nodes are inserted in ascending id order so indices are reproducible.
    /// The returned map translates node ids to graph indices.
    #[must_use]
    pub fn to_digraph(&self) -> (DiGraph<NodeId, ()>, HashMap<NodeId, NodeIndex>) {
        let mut graph = DiGraph::with_capacity(self.node_count(), self.edge_count());
        let mut index_of = HashMap::with_capacity(self.node_count());

        for node in self.sorted_nodes() {
            index_of.insert(node, graph.add_node(node));
        }
        for (from, to) in self.sorted_edges() {
            graph.add_edge(index_of[&from], index_of[&to], ());
        }

        (graph, index_of)
    }
}

impl FromIterator<Edge> for Network {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        let mut network = Network::new();
        network.extend(iter);
        network
    }
}

impl Extend<Edge> for Network {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, iter: I) {
        for (from, to) in iter {
            self.add_edge(from, to);
        }
    }
}
