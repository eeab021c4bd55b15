//! Bank Ledger CLI
//!
//! Runs the interactive banking menu on stdin/stdout. All state is kept in
//! memory and discarded when the program exits.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --withdrawal-limit 500 --daily-withdrawals 3
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use bank_ledger::{LedgerConfig, Menu, Money, Registry, Result};
use clap::Parser;
use log::debug;
use std::io;
use std::process;

/// Interactive in-memory banking ledger
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Branch code assigned to new accounts
    #[arg(long, default_value = LedgerConfig::DEFAULT_BRANCH)]
    branch: String,

    /// Largest amount a checking account may withdraw at once
    #[arg(long, default_value = "500.00")]
    withdrawal_limit: Money,

    /// Number of withdrawals allowed per checking account
    #[arg(long, default_value_t = LedgerConfig::DEFAULT_DAILY_WITHDRAWALS)]
    daily_withdrawals: u32,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = LedgerConfig {
        branch: args.branch,
        withdrawal_limit: args.withdrawal_limit,
        daily_withdrawal_limit: args.daily_withdrawals,
    };
    debug!("Starting ledger with {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(Registry::with_config(config), stdin.lock(), stdout.lock());
    menu.run()
}
