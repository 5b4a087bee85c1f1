//! CLI command implementations.

use std::path::{Path, PathBuf};

use catchnet::{Config, EdgeDirection, Network};
use tracing::info;

pub mod cycles;
pub mod print;
pub mod stats;

/// Command-line values that take precedence over the config file.
pub struct Overrides {
    /// `--db`
    pub database: Option<PathBuf>,
    /// `--query`
    pub query: Option<String>,
    /// `--reversed`
    pub reversed: bool,
}

/// Load the config file (if any) and apply command-line overrides.
pub fn load_config(path: Option<&Path>, overrides: Overrides) -> catchnet::Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(database) = overrides.database {
        config.database = Some(database);
    }
    if let Some(query) = overrides.query {
        config.query = query;
    }
    if overrides.reversed {
        config.direction = EdgeDirection::Reversed;
    }

    Ok(config)
}

/// Open the configured source and build the full network.
pub fn load_network(config: &Config) -> catchnet::Result<Network> {
    let source = config.open_source()?;
    let network = config.network_builder().build(&source)?;
    info!(
        nodes = network.node_count(),
        edges = network.edge_count(),
        "loaded network"
    );
    Ok(network)
}
