//! # bank-ledger
//! Interactive console over the in-memory banking ledger. State lives for
//! exactly one session and is lost on exit.

#![deny(missing_docs)]

use anyhow::Context;
use bank_ledger::bank::Bank;
use bank_ledger::console;
use tokio::io::{stdin, stdout, BufReader};

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::from_default_env().add_directive("bank_ledger=info".parse()?);

    // logs go to stderr so they never mix with the menu output
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing().context("install tracing subscriber")?;

    let mut bank = Bank::new();
    let input = BufReader::new(stdin());

    console::run(&mut bank, input, stdout())
        .await
        .context("console session failed")
}
