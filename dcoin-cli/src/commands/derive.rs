//! Per-chain derivation command, shared by every chain subcommand.

use std::io::{self, BufRead};

use anyhow::{bail, Context};
use clap::Args;
use dcoin_chains::{derive_many, AccountParams, Chain};
use dcoin_core::derive_seed;
use zeroize::Zeroizing;

/// Derive addresses (or secrets) for consecutive indices of one account.
#[derive(Args)]
pub struct DeriveCommand {
    /// BIP-44 purpose (defaults to the chain's own).
    #[arg(long)]
    purpose: Option<u32>,

    /// Account number.
    #[arg(short, long, default_value = "0")]
    account: u32,

    /// Change branch.
    #[arg(long, default_value = "0")]
    change: u32,

    /// First address index.
    #[arg(short, long, default_value = "0")]
    index: u32,

    /// Number of consecutive indices to derive.
    #[arg(short, long, default_value = "1")]
    count: u32,

    /// Print the secret instead of the address.
    #[arg(long)]
    secret: bool,

    /// Prefix each line with its derivation path.
    #[arg(long)]
    with_path: bool,

    /// BIP-39 mnemonic; read from the first line of stdin when unset.
    #[arg(long, env = "DCOIN_MNEMONIC", hide_env_values = true, hide = true)]
    mnemonic: Option<String>,

    /// BIP-39 passphrase.
    #[arg(long, env = "DCOIN_PASSPHRASE", hide_env_values = true, default_value = "")]
    passphrase: String,
}

impl DeriveCommand {
    /// Execute the derivation for `chain`.
    pub fn execute(self, chain: Chain) -> anyhow::Result<()> {
        let base = self.params(chain);
        // Reject bad segments before asking for the mnemonic.
        base.derivation_path(chain)
            .with_context(|| format!("invalid {chain} derivation path"))?;

        let mnemonic = match &self.mnemonic {
            Some(phrase) => Zeroizing::new(phrase.clone()),
            None => read_mnemonic()?,
        };
        let seed = derive_seed(mnemonic.trim(), &self.passphrase).context("invalid mnemonic")?;
        tracing::debug!(%chain, count = self.count, secret = self.secret, "deriving");

        let accounts = derive_many(&seed, chain, &base, self.count)
            .with_context(|| format!("{chain} derivation failed"))?;
        for account in &accounts {
            let output = if self.secret {
                account.secret.as_str()
            } else {
                account.address.as_str()
            };
            if self.with_path {
                println!("{}\t{output}", account.path);
            } else {
                println!("{output}");
            }
        }
        Ok(())
    }

    fn params(&self, chain: Chain) -> AccountParams {
        let mut params = AccountParams::for_chain(chain)
            .with_account(self.account)
            .with_change(self.change)
            .with_index(self.index);
        if let Some(purpose) = self.purpose {
            params = params.with_purpose(purpose);
        }
        params
    }
}

/// First line of stdin, trimmed.
fn read_mnemonic() -> anyhow::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read mnemonic from stdin")?;
    if line.trim().is_empty() {
        bail!("no mnemonic: set DCOIN_MNEMONIC or pipe it on stdin");
    }
    Ok(line)
}
