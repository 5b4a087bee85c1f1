//! Text renderings of a network.
//!
//! | Format | Shape |
//! |--------|-------|
//! | Plain | `node succ succ ...` per line, one line per node |
//! | Dot | Graphviz `digraph` with one `\tu -> v` line per edge |
//!
//! Nodes and successors are written in ascending order so the output is
//! reproducible between runs.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::network::Network;

/// Output serialization.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Adjacency list text
    Plain,
    /// Graphviz dot
    #[default]
    Dot,
}

impl OutputFormat {
    /// Write `network` to `out` in this format.
    ///
    /// `graph_name` only affects dot output.
    pub fn write<W: Write>(
        self,
        network: &Network,
        graph_name: Option<&str>,
        out: &mut W,
    ) -> io::Result<()> {
        match self {
            Self::Plain => write_plain(network, out),
            Self::Dot => write_dot(network, graph_name, out),
        }
    }

    /// Render `network` to a string in this format.
    #[must_use]
    pub fn render(self, network: &Network, graph_name: Option<&str>) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec cannot fail.
        let _ = self.write(network, graph_name, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Write one line per node: the node, then its successors, space separated.
pub fn write_plain<W: Write>(network: &Network, out: &mut W) -> io::Result<()> {
    for node in network.sorted_nodes() {
        write!(out, "{node}")?;
        let mut succs: Vec<_> = network
            .successors(node)
            .into_iter()
            .flatten()
            .copied()
            .collect();
        succs.sort_unstable();
        for succ in succs {
            write!(out, " {succ}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write a Graphviz `digraph` with one line per edge.
pub fn write_dot<W: Write>(
    network: &Network,
    graph_name: Option<&str>,
    out: &mut W,
) -> io::Result<()> {
    match graph_name {
        Some(name) => writeln!(out, "digraph {} {{", dot_id(name))?,
        None => writeln!(out, "digraph {{")?,
    }
    for (from, to) in network.sorted_edges() {
        writeln!(out, "\t{from} -> {to}")?;
    }
    writeln!(out, "}}")
}

/// Quote `name` unless it is already a bare dot identifier.
fn dot_id(name: &str) -> String {
    let mut chars = name.chars();
    let bare = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if bare {
        name.to_string()
    } else {
        format!("\"{}\"", name.replace('\\', "\\\\").replace('"', "\\\""))
    }
}
