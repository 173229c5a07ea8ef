//! CLI command definitions and handlers.

pub mod chains;
mod derive;
mod mnemonic;

use clap::{Parser, Subcommand};
pub use derive::DeriveCommand;
pub use mnemonic::MnemonicCommand;

/// dcoin - a multi-chain HD wallet key and address tool.
#[derive(Parser)]
#[command(name = "dcoin")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Bitcoin keys and addresses (purpose 44, 49 or 84).
    #[command(name = "btc", alias = "bitcoin")]
    Bitcoin(DeriveCommand),

    /// Bitcoin testnet keys and addresses.
    #[command(name = "btc-testnet", alias = "bitcoin-testnet")]
    BitcoinTestnet(DeriveCommand),

    /// Dogecoin keys and addresses.
    #[command(name = "doge", alias = "dogecoin")]
    Dogecoin(DeriveCommand),

    /// Ethereum keys and addresses.
    #[command(name = "eth", alias = "ethereum")]
    Ethereum(DeriveCommand),

    /// Tron keys and addresses.
    #[command(name = "trx", alias = "tron")]
    Tron(DeriveCommand),

    /// Solana keys and addresses.
    #[command(name = "sol", alias = "solana")]
    Solana(DeriveCommand),

    /// Sui keys and addresses.
    #[command(name = "sui")]
    Sui(DeriveCommand),

    /// Generate a fresh BIP-39 mnemonic.
    Mnemonic(MnemonicCommand),

    /// List supported chains and their default paths.
    Chains,
}
