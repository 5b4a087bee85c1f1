//! `catchnet cycles` command implementation.

use catchnet::{Config, NodeId, find_cycles, trace_cycle};
use colored::Colorize;

/// Run the cycles command.
///
/// Prints every strongly connected component that contains a loop, then one
/// concrete loop through it.
pub fn run(config: &Config) -> Result<(), catchnet::Error> {
    let network = super::load_network(config)?;
    let components = find_cycles(&network);

    if components.is_empty() {
        println!("{}", "No cycles detected.".green());
        return Ok(());
    }

    println!(
        "Found {} cyclic components:",
        components.len().to_string().red().bold()
    );

    for (i, members) in components.iter().enumerate() {
        println!();
        println!(
            "  {} {}: {}",
            "Component".yellow().bold(),
            i + 1,
            member_set(members)
        );

        let cycle = trace_cycle(&network, members);
        if let Some(&first) = cycle.first() {
            let walk = cycle
                .iter()
                .chain(std::iter::once(&first))
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" → ");
            println!("    {} {}", "loop:".dimmed(), walk);
        }
    }

    Ok(())
}

/// Render ids as `{a, b, c}`.
fn member_set(members: &[NodeId]) -> String {
    let ids: Vec<String> = members.iter().map(ToString::to_string).collect();
    format!("{{{}}}", ids.join(", "))
}
