//! `catchnet stats` command implementation.

use catchnet::{Config, NetworkStats, NodeId, find_cycles};
use colored::Colorize;

/// Maximum node ids listed per category before truncating.
const MAX_LISTED: usize = 10;

/// Run the stats command.
pub fn run(config: &Config) -> Result<(), catchnet::Error> {
    let network = super::load_network(config)?;
    let stats = NetworkStats::of(&network);
    let cycles = find_cycles(&network);

    println!("{}", "Catchment Network Statistics".cyan().bold());
    println!();

    if let Some(path) = &config.database {
        println!("  {}: {}", "Database".white().bold(), path.display());
    }
    println!("  {}: {}", "Direction".white().bold(), config.direction);
    println!();

    println!(
        "  {}: {}",
        "Nodes".white().bold(),
        stats.node_count.to_string().green()
    );
    println!(
        "  {}: {}",
        "Edges".white().bold(),
        stats.edge_count.to_string().green()
    );
    print_ids("Headwaters", &stats.sources);
    print_ids("Outlets", &stats.sinks);

    if stats.self_loops > 0 || !cycles.is_empty() {
        println!();
        println!("  {}: network is not acyclic", "Warning".yellow().bold());
        println!(
            "    {} cycles, {} self-loops",
            cycles.len().to_string().yellow(),
            stats.self_loops.to_string().yellow()
        );
        println!("    {}", "Run `catchnet cycles` for details.".dimmed());
    }

    Ok(())
}

fn print_ids(label: &str, ids: &[NodeId]) {
    println!(
        "  {}: {}",
        label.white().bold(),
        ids.len().to_string().green()
    );
    if ids.is_empty() {
        return;
    }

    let shown = ids
        .iter()
        .take(MAX_LISTED)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    if ids.len() > MAX_LISTED {
        println!(
            "    {} ... and {} more",
            shown.dimmed(),
            ids.len() - MAX_LISTED
        );
    } else {
        println!("    {}", shown.dimmed());
    }
}
