//! Mnemonic generation.

use anyhow::Context;
use clap::Args;
use dcoin_core::generate_mnemonic;

/// Generate a fresh BIP-39 mnemonic.
#[derive(Args, Debug)]
pub struct MnemonicCommand {
    /// Number of mnemonic words (12, 15, 18, 21, or 24).
    #[arg(short, long, default_value = "12")]
    words: usize,
}

impl MnemonicCommand {
    /// Execute the mnemonic command.
    pub fn execute(self) -> anyhow::Result<()> {
        let mnemonic =
            generate_mnemonic(self.words).context("failed to generate mnemonic")?;
        println!("{}", mnemonic.as_str());
        Ok(())
    }
}
