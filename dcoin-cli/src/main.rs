//! dcoin - derive keys and addresses for several chains from one mnemonic.
//!
//! The mnemonic is read from `DCOIN_MNEMONIC` or the first line of stdin;
//! results go to stdout, diagnostics to stderr.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};
use dcoin_chains::Chain;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Bitcoin(cmd) => cmd.execute(Chain::Bitcoin)?,
        Commands::BitcoinTestnet(cmd) => cmd.execute(Chain::BitcoinTestnet)?,
        Commands::Dogecoin(cmd) => cmd.execute(Chain::Dogecoin)?,
        Commands::Ethereum(cmd) => cmd.execute(Chain::Ethereum)?,
        Commands::Tron(cmd) => cmd.execute(Chain::Tron)?,
        Commands::Solana(cmd) => cmd.execute(Chain::Solana)?,
        Commands::Sui(cmd) => cmd.execute(Chain::Sui)?,
        Commands::Mnemonic(cmd) => cmd.execute()?,
        Commands::Chains => commands::chains::list(),
    }
    Ok(())
}
