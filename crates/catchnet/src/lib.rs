//! # Catchnet: Catchment Network Graphs
//!
//! Catchnet builds a directed network of catchment segments from a flat edge
//! table, derives restricted views of it, and renders the result as plain
//! adjacency text or Graphviz dot.
//!
//! ## Pipeline
//!
//! 1. An [`EdgeSource`] (usually [`SqliteSource`]) streams `(from, to)` rows
//! 2. [`NetworkBuilder`] turns them into a [`Network`], forward or reversed
//! 3. Optionally derive a view:
//!    - [`sub_network`]: a target and everything upstream of it
//!    - [`paths_to`]: every simple path from a root to a target
//! 4. [`OutputFormat`] writes the network to any `io::Write`
//!
//! ## Quick Start
//!
//! ```
//! use catchnet::{EdgeDirection, NetworkBuilder, OutputFormat};
//!
//! let edges: [(i64, i64); 5] = [(0, 1), (1, 3), (0, 2), (2, 3), (3, 4)];
//! let network = NetworkBuilder::new(EdgeDirection::Forward).build(edges.as_slice())?;
//!
//! let upstream = network.sub_network(3);
//! assert_eq!(upstream.node_count(), 4);
//!
//! let dot = OutputFormat::Dot.render(&upstream, Some("upstream"));
//! assert!(dot.starts_with("digraph upstream {"));
//! # Ok::<(), catchnet::Error>(())
//! ```
//!
//! Unknown targets and roots are not errors: the derived network is simply
//! empty.

pub mod analysis;
pub mod ancestors;
mod builder;
pub mod config;
mod db;
mod error;
mod network;
pub mod paths;
pub mod render;
mod source;

pub use analysis::{NetworkStats, find_cycles, trace_cycle};
pub use ancestors::sub_network;
pub use builder::{EdgeDirection, NetworkBuilder};
pub use config::{Config, OutputConfig};
pub use db::{DEFAULT_QUERY, SqliteSource};
pub use error::{BoxError, Error, Result};
pub use network::{Edge, Network, NodeId, NodeSet};
pub use paths::paths_to;
pub use render::OutputFormat;
pub use source::EdgeSource;
