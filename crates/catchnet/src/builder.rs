//! Network construction from an edge stream.
//!
//! Two edge conventions exist for catchment tables: rows listed in flow
//! order, and rows listed against flow. Rather than inferring the convention
//! from the query text, the builder takes it as an explicit [`EdgeDirection`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::network::{Network, NodeId};
use crate::source::EdgeSource;

/// How each `(from, to)` row is inserted into the network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeDirection {
    /// Insert `from → to` as given.
    #[default]
    Forward,
    /// Insert `to → from`, flipping the whole network.
    Reversed,
}

impl EdgeDirection {
    /// Orient a source row according to this direction.
    #[must_use]
    pub fn orient(self, from: NodeId, to: NodeId) -> (NodeId, NodeId) {
        match self {
            Self::Forward => (from, to),
            Self::Reversed => (to, from),
        }
    }
}

impl std::fmt::Display for EdgeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Reversed => write!(f, "reversed"),
        }
    }
}

/// Builds a [`Network`] from an [`EdgeSource`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkBuilder {
    direction: EdgeDirection,
}

impl NetworkBuilder {
    /// Create a builder inserting edges in the given direction.
    #[must_use]
    pub fn new(direction: EdgeDirection) -> Self {
        Self { direction }
    }

    /// The direction edges are inserted in.
    #[must_use]
    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }

    /// Consume `source` and return the network holding exactly its edges.
    ///
    /// Fails with the source's error if the query, a row, or the stream
    /// fails. No partially built network is returned in that case.
    pub fn build<S: EdgeSource + ?Sized>(&self, source: &S) -> Result<Network> {
        let mut network = Network::new();
        let mut rows = 0usize;

        source.for_each_edge(&mut |from, to| {
            let (from, to) = self.direction.orient(from, to);
            network.add_edge(from, to);
            rows += 1;
        })?;

        debug!(
            rows,
            nodes = network.node_count(),
            edges = network.edge_count(),
            direction = %self.direction,
            "built network"
        );

        Ok(network)
    }

    /// Build from an in-memory list of pairs. Cannot fail.
    #[must_use]
    pub fn build_from_pairs<I>(&self, pairs: I) -> Network
    where
        I: IntoIterator<Item = (NodeId, NodeId)>,
    {
        pairs
            .into_iter()
            .map(|(from, to)| self.direction.orient(from, to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    /// Emits its edges, then fails with the configured error.
    struct FailingSource {
        edges: Vec<(NodeId, NodeId)>,
        error: fn() -> Error,
    }

    impl EdgeSource for FailingSource {
        fn for_each_edge(&self, visit: &mut dyn FnMut(NodeId, NodeId)) -> Result<()> {
            for &(from, to) in &self.edges {
                visit(from, to);
            }
            Err((self.error)())
        }
    }

    #[test]
    fn forward_keeps_row_orientation() {
        let edges: [(NodeId, NodeId); 2] = [(0, 1), (1, 2)];

        let network = NetworkBuilder::new(EdgeDirection::Forward)
            .build(edges.as_slice())
            .expect("slice source cannot fail");

        assert_eq!(network.sorted_edges(), vec![(0, 1), (1, 2)]);
    }

    #[test]
    fn reversed_flips_every_row() {
        let edges: [(NodeId, NodeId); 2] = [(0, 1), (1, 2)];

        let network = NetworkBuilder::new(EdgeDirection::Reversed)
            .build(edges.as_slice())
            .expect("slice source cannot fail");

        assert_eq!(network.sorted_edges(), vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn build_from_pairs_matches_build() {
        let edges: [(NodeId, NodeId); 3] = [(5, 6), (6, 7), (5, 7)];
        let builder = NetworkBuilder::new(EdgeDirection::Reversed);

        let from_source = builder.build(edges.as_slice()).expect("cannot fail");
        let from_pairs = builder.build_from_pairs(edges);

        assert_eq!(from_source, from_pairs);
    }

    #[test]
    fn empty_source_builds_empty_network() {
        let edges: [(NodeId, NodeId); 0] = [];

        let network = NetworkBuilder::default()
            .build(edges.as_slice())
            .expect("cannot fail");

        assert!(network.is_empty());
    }

    #[test]
    fn source_failure_discards_partial_network() {
        let source = FailingSource {
            edges: vec![(0, 1), (1, 2)],
            error: || Error::row_decode(3, "invalid column type Text"),
        };

        let result = NetworkBuilder::default().build(&source);

        assert!(matches!(result, Err(Error::RowDecode { row: 3, .. })));
    }

    #[test]
    fn stream_failure_propagates() {
        let source = FailingSource {
            edges: vec![],
            error: || Error::stream("connection dropped"),
        };

        let result = NetworkBuilder::default().build(&source);

        assert!(matches!(result, Err(Error::Stream(_))));
    }

    #[test]
    fn direction_deserializes_from_kebab_case() {
        let direction: EdgeDirection = serde_yaml::from_str("reversed").expect("valid yaml");
        assert_eq!(direction, EdgeDirection::Reversed);
        assert_eq!(direction.to_string(), "reversed");
    }
}
