//! `catchnet print` command implementation.

use std::io::{self, BufWriter, Write};

use catchnet::{Config, Network, NodeId, OutputFormat};

/// Which part of the network to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// The whole network.
    Whole,
    /// A target and everything upstream of it.
    Upstream { target: NodeId },
    /// Every simple path from `root` to `target`.
    Paths { root: NodeId, target: NodeId },
}

impl View {
    /// Select a view from the `--from` / `--to` flags.
    ///
    /// Clap rejects `--from` without `--to`, so a lone root is ignored here.
    pub fn new(root: Option<NodeId>, target: Option<NodeId>) -> Self {
        match (root, target) {
            (Some(root), Some(target)) => Self::Paths { root, target },
            (None, Some(target)) => Self::Upstream { target },
            _ => Self::Whole,
        }
    }

    /// Derive this view from the full network.
    pub fn apply(self, network: Network) -> Network {
        match self {
            Self::Whole => network,
            Self::Upstream { target } => network.sub_network(target),
            Self::Paths { root, target } => network.paths_to(root, target),
        }
    }
}

/// Run the print command.
pub fn run(
    config: &Config,
    view: View,
    format: Option<OutputFormat>,
    name: Option<String>,
) -> Result<(), catchnet::Error> {
    let network = view.apply(super::load_network(config)?);

    let format = format.unwrap_or(config.output.format);
    let name = name.or_else(|| config.output.graph_name.clone());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    format.write(&network, name.as_deref(), &mut out)?;
    out.flush()?;

    Ok(())
}
