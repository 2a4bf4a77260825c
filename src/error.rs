//! Error types for the bank ledger.

use crate::account::AccountId;
use crate::decimal::Money;
use thiserror::Error;

/// Result type alias for ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Errors that can occur while operating on accounts or the account store.
///
/// Every variant is recoverable: the core never terminates the process, the
/// caller decides whether to prompt again or give up.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Failed to open, read or write the account store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Bad construction input (negative opening balance, bad holder name, ...)
    #[error("Invalid account state: {0}")]
    InvalidAccountState(String),

    /// Deposit or withdrawal amount was zero, negative, or too large to apply
    #[error("Invalid amount {amount}: amount must be positive and within range")]
    InvalidAmount { amount: Money },

    #[error("Insufficient funds: balance is {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },

    #[error("Overdraft limit of {limit} exceeded: balance is {balance}, requested {requested}")]
    OverdraftExceeded {
        balance: Money,
        requested: Money,
        limit: Money,
    },

    #[error("Duplicate account ID {0}")]
    DuplicateAccountId(AccountId),

    /// Sign-in mismatch: unknown account ID or holder name differs
    #[error("Account not found or incorrect name")]
    AuthFailure,

    #[error("Account {0} not found")]
    AccountNotFound(AccountId),

    /// Persisted record could not be turned back into an account
    #[error("Corrupt record at row {row}: {message}")]
    CorruptRecord { row: usize, message: String },
}
