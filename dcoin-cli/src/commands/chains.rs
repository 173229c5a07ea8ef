//! Listing of the supported chains.

use colored::Colorize;
use dcoin_chains::{AccountParams, Chain};

/// Print every supported chain with its curve and default path.
#[rustfmt::skip]
pub fn list() {
    println!();
    println!("      {:<12} {:<16} {:<10} {}", "Id".cyan().bold(), "Name".cyan().bold(), "Curve".cyan().bold(), "Path".cyan().bold());
    for chain in Chain::ALL {
        let path = AccountParams::for_chain(chain)
            .derivation_path(chain)
            .map(|p| p.to_string())
            .unwrap_or_default();
        println!("      {:<12} {:<16} {:<10} {}", chain.id().green(), chain.name(), chain.descriptor().curve.to_string(), path.dimmed());
    }
    println!();
}
