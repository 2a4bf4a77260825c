//! # Bank Ledger
//!
//! A single-user bank account ledger: standard, savings and checking accounts
//! with a per-account transaction history, persisted to a flat CSV file.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: Uses 2 decimal places via `rust_decimal`
//! - **Closed account variants**: Each `AccountKind` supplies its own deposit
//!   and withdrawal policy
//! - **Strict invariants**: `balance == opening balance + sum of transaction deltas`
//! - **Explicit lifecycle**: The directory is loaded at start, passed to the
//!   shell, and saved after every change
//!
//! ## Example
//!
//! ```no_run
//! use bank_ledger::{storage, Account, AccountDirectory, AccountKind, Money};
//! use std::path::Path;
//! use std::str::FromStr;
//!
//! let mut directory = AccountDirectory::new();
//! let mut account = Account::new(
//!     "1001",
//!     "Jane Doe",
//!     Money::from_str("100").unwrap(),
//!     AccountKind::savings(),
//! )
//! .unwrap();
//! account.deposit(Money::from_str("100").unwrap()).unwrap();
//! directory.insert(account).unwrap();
//! storage::save_to_path(&directory, Path::new("accounts.csv")).unwrap();
//! ```

pub mod account;
pub mod config;
pub mod decimal;
pub mod directory;
pub mod error;
pub mod shell;
pub mod storage;
pub mod transaction;

pub use account::{validate_holder_name, Account, AccountId, AccountKind};
pub use config::Config;
pub use decimal::Money;
pub use directory::AccountDirectory;
pub use error::{LedgerError, Result};
pub use shell::Shell;
pub use transaction::{Transaction, TransactionKind};
