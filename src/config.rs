//! Runtime configuration for the ledger binary.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the account store when no path argument is given.
pub const STORE_ENV_VAR: &str = "BANK_LEDGER_STORE";

/// Store used when neither an argument nor the environment names one.
pub const DEFAULT_STORE: &str = "accounts.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// CSV file the account directory is loaded from and saved to.
    pub store_path: PathBuf,
}

impl Config {
    /// Resolves the store path: first positional argument, then
    /// `BANK_LEDGER_STORE`, then `accounts.csv`.
    pub fn from_env<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self::resolve(args.into_iter().next(), env::var(STORE_ENV_VAR).ok())
    }

    fn resolve(arg: Option<String>, env_value: Option<String>) -> Self {
        let store_path = arg
            .or(env_value)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STORE.to_string());

        Config {
            store_path: PathBuf::from(store_path),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            store_path: PathBuf::from(DEFAULT_STORE),
        }
    }
}
