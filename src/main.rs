//! Bank Ledger CLI
//!
//! An interactive text shell for signing up, signing in and operating on a
//! bank account. Accounts are kept in a CSV store between sessions.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- accounts.csv
//! ```
//!
//! # Environment Variables
//!
//! - `BANK_LEDGER_STORE`: Store path used when none is given on the command line
//! - `RUST_LOG`: Set to `debug` or `info` to control logging verbosity

use bank_ledger::{storage, Config, Result, Shell};
use std::env;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = Config::from_env(env::args().skip(1));
    let directory = storage::load_from_path(&config.store_path)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(directory, config.store_path, stdin.lock(), stdout.lock());
    shell.run()?;

    Ok(())
}
